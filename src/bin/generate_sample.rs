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

    /// Count scattered ±50% around `base`.
    fn count_around(&mut self, base: f64) -> u64 {
        (base * (0.5 + self.next_f64())).round() as u64
    }
}

// Headers carry stray and doubled spaces on purpose; the dashboard
// normalizes them on load.
const HEADERS: [&str; 9] = [
    " STATE",
    "DISTRICT",
    "NIC Name",
    "Industry Classification ",
    "Main Workers  - Rural - Persons",
    "Main Workers - Urban -  Persons",
    "Marginal Workers - Rural - Persons",
    "Marginal  Workers - Urban - Persons",
    "Remarks",
];

fn main() -> Result<()> {
    env_logger::init();
    let mut rng = SimpleRng::new(42);

    let states: [(&str, &[&str], f64); 4] = [
        ("ASSAM", &["Kamrup", "Dibrugarh"], 0.6),
        ("GOA", &["North Goa", "South Goa"], 0.9),
        ("KERALA", &["Ernakulam", "Thrissur", "Kollam"], 0.8),
        ("RAJASTHAN", &["Jaipur", "Udaipur"], 0.3),
    ];
    let industries = [
        ("Agriculture", "Growing of crops", 4000.0),
        ("Manufacturing", "Manufacture of textiles", 1500.0),
        ("Mining", "Quarrying of stone", 600.0),
        ("Services", "Retail trade", 2200.0),
    ];

    let output_path = "structured_classified.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(HEADERS).context("writing header")?;

    let mut rows = 0usize;
    for (state, districts, urban_share) in &states {
        for district in districts.iter() {
            for (industry, nic, base) in &industries {
                let main_rural = rng.count_around(base * (1.0 - urban_share));
                let main_urban = rng.count_around(base * urban_share);
                let marginal_rural = rng.count_around(base * 0.2 * (1.0 - urban_share));
                // Leave some marginal urban counts blank to exercise null-skipping.
                let marginal_urban = if rng.next_f64() < 0.1 {
                    String::new()
                } else {
                    rng.count_around(base * 0.2 * urban_share).to_string()
                };

                writer
                    .write_record([
                        state.to_string(),
                        district.to_string(),
                        nic.to_string(),
                        industry.to_string(),
                        main_rural.to_string(),
                        main_urban.to_string(),
                        marginal_rural.to_string(),
                        marginal_urban,
                        String::new(),
                    ])
                    .with_context(|| format!("writing row {rows}"))?;
                rows += 1;
            }
        }
    }
    writer.flush().context("flushing CSV")?;

    log::info!("generated {rows} rows");
    println!("Wrote {rows} rows to {output_path}");
    Ok(())
}
