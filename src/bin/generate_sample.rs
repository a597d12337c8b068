//! Writes a deterministic sample launch-records CSV for the dashboard.
//!
//! Usage: `cargo run --bin generate_sample [output.csv]`

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

    /// Uniform value in [lo, hi).
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

fn main() {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/spacex_launch_dash.csv".to_string());

    let mut rng = SimpleRng::new(42);

    // (site, launches, success rate) roughly matching the real record mix.
    let sites: [(&str, usize, f64); 4] = [
        ("CCAFS LC-40", 26, 0.60),
        ("CCAFS SLC-40", 7, 0.43),
        ("KSC LC-39A", 13, 0.77),
        ("VAFB SLC-4E", 10, 0.40),
    ];

    // Booster categories with the payload band each typically flew.
    let boosters: [(&str, f64, f64); 5] = [
        ("v1.0", 0.0, 700.0),
        ("v1.1", 500.0, 4000.0),
        ("FT", 1500.0, 9600.0),
        ("B4", 2000.0, 9600.0),
        ("B5", 3000.0, 6500.0),
    ];

    let mut writer = csv::Writer::from_path(&output_path).expect("Failed to create output file");
    writer
        .write_record([
            "Launch Site",
            "Payload Mass (kg)",
            "Booster Version Category",
            "class",
        ])
        .expect("Failed to write header");

    let mut rows = 0usize;
    for (site, launches, success_rate) in sites {
        for _ in 0..launches {
            let (booster, lo, hi) = boosters[(rng.next_u64() % boosters.len() as u64) as usize];
            let payload = rng.range(lo, hi).round();
            let class = if rng.next_f64() < success_rate { 1 } else { 0 };

            writer
                .write_record([
                    site.to_string(),
                    format!("{payload}"),
                    booster.to_string(),
                    format!("{class}"),
                ])
                .expect("Failed to write row");
            rows += 1;
        }
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {rows} launch records to {output_path}");
}
