use std::str::FromStr;

use imbalance_quantities::{power::Megawatts, price::KilowattHourPrice, share::Share};
use crate::{calculator::CalculationInput, cli::InputPolicy};

/// Raw form submission, field values are kept as strings until [`CalculationForm::parse`].
#[derive(Clone, Debug, Default)]
pub struct CalculationForm {
    pub power: Option<String>,

    pub cost: Option<String>,

    pub portion: Option<String>,
}

#[derive(Debug, thiserror::Error)]
#[error("`{name}` must be a number")]
pub struct InvalidField {
    pub name: &'static str,
    pub value: Option<String>,
}

impl FromIterator<(String, String)> for CalculationForm {
    /// The first occurrence of a field wins, unknown fields are ignored.
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut form = Self::default();
        for (name, value) in pairs {
            let field = match name.as_str() {
                "powerMW" => &mut form.power,
                "cost" => &mut form.cost,
                "portion" => &mut form.portion,
                _ => continue,
            };
            if field.is_none() {
                *field = Some(value);
            }
        }
        form
    }
}

impl CalculationForm {
    /// Fields are checked in the form order: `powerMW`, `cost`, then `portion`.
    pub fn parse(&self, policy: InputPolicy) -> Result<CalculationInput, InvalidField> {
        Ok(CalculationInput {
            power: parse_field::<Megawatts>("powerMW", self.power.as_deref(), policy)?,
            price: parse_field::<KilowattHourPrice>("cost", self.cost.as_deref(), policy)?,
            penalty_free_share: parse_field::<Share>("portion", self.portion.as_deref(), policy)?,
        })
    }
}

fn parse_field<Q>(
    name: &'static str,
    value: Option<&str>,
    policy: InputPolicy,
) -> Result<Q, InvalidField>
where
    Q: FromStr + From<f64>,
{
    match (value.map(str::parse::<Q>), policy) {
        (Some(Ok(quantity)), _) => Ok(quantity),
        (_, InputPolicy::Lenient) => Ok(Q::from(0.0)),
        (_, InputPolicy::Strict) => Err(InvalidField { name, value: value.map(ToOwned::to_owned) }),
    }
}
