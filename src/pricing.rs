use anyhow::{bail, Result};
use log::trace;
use serde_json::{Map, Value};

/// One priced item: a free-form record where only the `price` field matters.
/// Anything else (`item` name and so on) is carried along but ignored here.
pub type PricedRecord = Map<String, Value>;

/// Sum the `price` field across `items`, left to right.
///
/// A record without a `price` contributes 0. A record whose `price` is not
/// a JSON number fails the whole call; there is no partial total.
pub fn sum_prices(items: &[PricedRecord]) -> Result<f64> {
    trace!("summing prices over {} record(s)", items.len());
    let mut total = 0.0;
    for (idx, item) in items.iter().enumerate() {
        match item.get("price") {
            None => continue,
            Some(Value::Number(price)) => match price.as_f64() {
                Some(value) => total += value,
                None => bail!("record #{}: price {} does not fit in f64", idx, price),
            },
            Some(other) => bail!("record #{}: price is not numeric: {}", idx, other),
        }
    }
    Ok(total)
}
