use std::fmt::{Display, Formatter, Write};

use crate::{
    calculator::{CalculationInput, CalculationResult},
    form::{CalculationForm, InvalidField},
};

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Imbalance calculator</title>
<style>
body { font-family: Arial, sans-serif; background-color: #f8f9fa; margin: 0; }
main { max-width: 600px; margin: 40px auto; padding: 20px; background-color: #fff; border-radius: 5px; }
form { display: flex; flex-direction: column; }
label { font-weight: bold; margin: 10px 0 5px; }
.error { color: #b00020; }
</style>
</head>
<body>
<main>
<h1>Imbalance calculator</h1>
"#;

const TAIL: &str = "</main>\n</body>\n</html>\n";

pub enum Page {
    /// Empty form.
    Blank,

    /// Form filled with the parsed input, followed by the results.
    Computed { input: CalculationInput, result: CalculationResult },

    /// Form filled with the submitted strings as is, followed by the error.
    Rejected { form: CalculationForm, error: InvalidField },
}

impl Page {
    pub fn render(&self) -> Result<String, std::fmt::Error> {
        let mut html = String::new();
        write!(html, "{self}")?;
        Ok(html)
    }

    fn field_values(&self) -> [Option<String>; 3] {
        match self {
            Self::Blank => [None, None, None],
            Self::Computed { input, .. } => [
                Some(input.power.0.to_string()),
                Some(input.price.0.to_string()),
                Some(input.penalty_free_share.0.to_string()),
            ],
            Self::Rejected { form, .. } => {
                [form.power.clone(), form.cost.clone(), form.portion.clone()]
            }
        }
    }
}

impl Display for Page {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(HEAD)?;

        let [power, cost, portion] = self.field_values();
        f.write_str("<form action=\"/\" method=\"post\">\n")?;
        write_field(f, "powerMW", "Power, MW", power.as_deref())?;
        write_field(f, "cost", "Price per kWh", cost.as_deref())?;
        write_field(f, "portion", "Penalty-free share, 0..1", portion.as_deref())?;
        f.write_str("<button type=\"submit\">Calculate</button>\n</form>\n")?;

        match self {
            Self::Blank => {}
            Self::Computed { result, .. } => {
                f.write_str("<section class=\"result\">\n<h2>Results</h2>\n<dl>\n")?;
                write_figure(f, "revenue", "Revenue", result.revenue.0)?;
                write_figure(f, "penalty", "Penalty", result.penalty.0)?;
                write_figure(f, "profit", "Profit", result.profit.0)?;
                f.write_str("</dl>\n</section>\n")?;
            }
            Self::Rejected { error, .. } => {
                writeln!(f, "<p class=\"error\">{}</p>", Escaped(&error.to_string()))?;
            }
        }

        f.write_str(TAIL)
    }
}

fn write_field(
    f: &mut Formatter<'_>,
    name: &str,
    label: &str,
    value: Option<&str>,
) -> std::fmt::Result {
    writeln!(f, "<label for=\"{name}\">{label}</label>")?;
    write!(f, "<input type=\"text\" id=\"{name}\" name=\"{name}\"")?;
    if let Some(value) = value {
        write!(f, " value=\"{}\"", Escaped(value))?;
    }
    f.write_str(" required>\n")
}

fn write_figure(f: &mut Formatter<'_>, id: &str, label: &str, value: f64) -> std::fmt::Result {
    writeln!(f, "<dt>{label}, thousands</dt><dd id=\"{id}\">{value:.1}</dd>")
}

/// HTML-escaped text, safe both in element content and in quoted attributes.
struct Escaped<'a>(&'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for char_ in self.0.chars() {
            match char_ {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                _ => f.write_char(char_)?,
            }
        }
        Ok(())
    }
}
