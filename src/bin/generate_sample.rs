use anyhow::{Context, Result};

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

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform draw in `[lo, hi)`, rounded to two decimals.
    fn ratio(&mut self, lo: f64, hi: f64) -> f64 {
        ((lo + (hi - lo) * self.next_f64()) * 100.0).round() / 100.0
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let sectors = ["Technology", "Utilities", "Healthcare", "Industrials", "Consumer"];
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_fundamentals.csv".to_string());

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(["Company", "Sector", "ROE", "Debt to Equity", "ROCE", "PEG Ratio"])?;

    let n_rows = 60;
    for i in 0..n_rows {
        let sector = sectors[i % sectors.len()];
        let roe = rng.ratio(2.0, 30.0);
        let debt_to_equity = rng.ratio(0.0, 1.5);
        let roce = rng.ratio(5.0, 35.0);
        let peg = rng.ratio(0.2, 2.5);

        // Every tenth row leaves a ratio blank, the way data vendors often do.
        let peg_cell = if i % 10 == 9 { String::new() } else { peg.to_string() };

        writer.write_record([
            format!("Company_{i:03}"),
            sector.to_string(),
            roe.to_string(),
            debt_to_equity.to_string(),
            roce.to_string(),
            peg_cell,
        ])?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {n_rows} companies to {output_path}");
    Ok(())
}
