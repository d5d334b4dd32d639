use chrono::NaiveDate;

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

    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let platforms = ["TikTok", "Instagram", "X", "YouTube", "Facebook"];
    let influencers = [
        "@eco.mama",
        "@fizz_fan",
        "@sip.daily",
        "@swizzle.official",
        "@refresh_rani",
        "@bubbly.budi",
        "@thirst_trap",
        "@soda.science",
        "@citra_segar",
        "@mix.master.mo",
        "@kiosk_kid",
        "@hydro_homie",
    ];
    let brand_templates = [
        "Review by {} !!",
        "{} x SwizzleSip collab",
        "Unboxing with {}",
        "{} tries the new flavour",
        "Giveaway hosted by {}",
    ];
    // A handful of posts carry no handle at all.
    let no_handle_brands = ["SwizzleSip press release", "Brand account repost"];
    let sentiments = ["Positive", "Positive", "Neutral", "Negative"];

    let start = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
    let output_path = "SwizzleSip.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["Date", "Platform", "Influencer_Brand", "Engagements", "Sentiment"])
        .expect("Failed to write header");

    let n_rows = 200;
    for _ in 0..n_rows {
        let date = start + chrono::Days::new(rng.next_u64() % 60);
        let platform = platforms[rng.next_usize(platforms.len())];
        // Roughly one row in ten has no extractable handle.
        let brand = if rng.next_usize(10) == 0 {
            no_handle_brands[rng.next_usize(no_handle_brands.len())].to_string()
        } else {
            let template = brand_templates[rng.next_usize(brand_templates.len())];
            template.replace("{}", influencers[rng.next_usize(influencers.len())])
        };
        let engagements = 50 + rng.next_u64() % 20_000;
        let sentiment = sentiments[rng.next_usize(sentiments.len())];

        writer
            .write_record([
                date.to_string().as_str(),
                platform,
                brand.as_str(),
                engagements.to_string().as_str(),
                sentiment,
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {n_rows} posts to {output_path}");
}
