//! Generate a deterministic synthetic `ispa.json` for trying out the
//! dashboard. A few rows get absent or malformed fields on purpose so the
//! fallback labels show up in the charts.

use anyhow::{Context, Result};
use serde_json::{json, Map, Value};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform integer in `0..n`.
    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len() as u64) as usize]
    }
}

fn age_label(rng: &mut SimpleRng) -> Option<Value> {
    match rng.below(10) {
        // Infants in months, the rest in years, mixed-case units included.
        0 | 1 => Some(json!(format!("{} Bl", 1 + rng.below(11)))),
        2 => Some(json!(format!("{}Th", 1 + rng.below(80)))),
        3 => Some(json!("tidak diketahui")),
        4 => None,
        _ => Some(json!(format!("{} Th", 1 + rng.below(80)))),
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let genders = ["LK", "PR"];
    let categories = ["ISPA Ringan", "ISPA Ringan", "ISPA Sedang", "ISPA Berat"];
    let symptoms = [
        "batuk, pilek",
        "demam, batuk",
        "sesak napas",
        "batuk, demam, sesak napas",
        "pilek",
    ];

    let mut records = Vec::new();
    for _ in 0..150 {
        let mut row = Map::new();
        if rng.below(20) != 0 {
            row.insert("JK".to_string(), json!(rng.pick(&genders)));
        }
        if let Some(age) = age_label(&mut rng) {
            row.insert("Usia".to_string(), age);
        }
        if rng.below(15) != 0 {
            row.insert("Kategori ISPA".to_string(), json!(rng.pick(&categories)));
        }
        row.insert("Gejala".to_string(), json!(rng.pick(&symptoms)));
        records.push(Value::Object(row));
    }

    let path = "ispa.json";
    let text = serde_json::to_string_pretty(&Value::Array(records))?;
    std::fs::write(path, text).with_context(|| format!("writing {path}"))?;
    println!("Wrote 150 case records to {path}");

    Ok(())
}
