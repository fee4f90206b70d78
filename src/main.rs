use serde_json::json;
use tally::{count_word_frequencies, sum_prices, PricedRecord};

fn main() -> anyhow::Result<()> {
    let file_name = "data/sample.txt";

    let frequencies = match count_word_frequencies(file_name) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error counting words in {}: {:#}", file_name, e);
            return Err(e);
        }
    };

    // Most frequent first, ties broken alphabetically
    let mut table = frequencies.into_iter().collect::<Vec<_>>();
    table.sort_by(|(wa, ca), (wb, cb)| cb.cmp(ca).then_with(|| wa.cmp(wb)));

    println!("Word frequencies in {}:", file_name);
    for (word, count) in &table {
        println!("{:>8}  {}", count, word);
    }

    let items: Vec<PricedRecord> = serde_json::from_value(json!([
        {"item": "apple", "price": 1.5},
        {"item": "banana", "price": 0.75},
    ]))?;

    let total = sum_prices(&items)?;
    println!("Sample basket total: {}", total);

    Ok(())
}
