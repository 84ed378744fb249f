use anyhow::Result;
use rust_decimal::Decimal;
use std::io::Write;

use super::Report;
use crate::models::Category;

const UNDERLINE: &str = "=========================";

/// Print the four-column breakdown table followed by the tips section.
pub(crate) fn render(report: &Report, out: &mut impl Write) -> Result<()> {
    writeln!(out, "\n\nHere's a breakdown of your expenses:")?;
    writeln!(
        out,
        "\n{:<30} {:<30} {:<30} {:<30}",
        "CATEGORY", "NUMBER OF TRANSACTIONS", "TOTAL EXPENDITURE", "MONTHLY (APPROX.)"
    )?;
    writeln!(
        out,
        "{UNDERLINE:<30} {UNDERLINE:<30} {UNDERLINE:<30} {UNDERLINE:<30}"
    )?;

    for row in &report.summaries {
        writeln!(
            out,
            "{:<30} {:<30} {:<30} {:<30}",
            row.category.as_str(),
            row.count,
            format_amount(row.total.round_dp(2)),
            format_amount(row.monthly)
        )?;
    }

    writeln!(out, "\n\nTips:")?;
    for paragraph in tips(report) {
        writeln!(out, "\n{paragraph}")?;
    }

    Ok(())
}

/// Advisory paragraphs for categories with positive expenditure, in report
/// order. The luxury intro is emitted once, before the first luxury tip.
fn tips(report: &Report) -> Vec<String> {
    let months = report.months.round();
    let mut paragraphs = Vec::new();
    let mut luxury_intro_added = false;

    for row in &report.summaries {
        if row.total <= Decimal::ZERO {
            continue;
        }
        let total = format_amount(row.total.round_dp(2));
        let monthly = format_amount(row.monthly);
        let count = row.count;

        match row.category {
            Category::Penalties => paragraphs.push(format!(
                "* Avoid paying penalties due to late payment of rent, etc. Over the last \
                 {months} months, you have paid {total} for such penalties unnecessarily!"
            )),
            Category::Restaurants | Category::Cab | Category::Entertainment => {
                if !luxury_intro_added {
                    paragraphs.push(
                        "These are luxuries for which you can spend less in order to save more \
                         for your goal, since they aren't really necessities:"
                            .into(),
                    );
                    luxury_intro_added = true;
                }
                paragraphs.push(match row.category {
                    Category::Restaurants => format!(
                        "* Did you know you could save a lot more cooking by yourself rather \
                         than eating out? Over the last {months} months, you have spent {total} \
                         (approximately {monthly} per month) on eating out {count} times!"
                    ),
                    Category::Cab => format!(
                        "* Rather than using taxicabs, plan out your travel in advance and use \
                         public transport to save money. Over the last {months} months, you have \
                         spent {total} (approximately {monthly} per month) on taxicabs {count} \
                         times!"
                    ),
                    _ => format!(
                        "* We know that \"All work and no play makes Jack a dull boy!\" but if \
                         you really want to save more, you could do so many things for free to \
                         keep yourself entertained. Go out and play some sports! It would keep \
                         you fit too. Over the last {months} months, you have spent {total} on \
                         entertainment."
                    ),
                });
            }
            Category::Shopping => {
                paragraphs.push("Coming to shopping:".into());
                paragraphs.push(format!(
                    "* You could try to reduce some shopping or find cheaper alternatives if \
                     you could. Over the last {months} months, you have spent {total} \
                     (approximately {monthly} per month) on shopping."
                ));
            }
            _ => {}
        }
    }

    paragraphs
}

/// Format a decimal as a dollar amount with two decimal places, sign first.
/// e.g. `35` → `"$35.00"`, `-4.5` → `"-$4.50"`
fn format_amount(val: Decimal) -> String {
    let abs = val.abs();
    if val < Decimal::ZERO {
        format!("-${abs:.2}")
    } else {
        format!("${abs:.2}")
    }
}
