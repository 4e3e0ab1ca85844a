use serde::Serialize;

/// One row of `merged_metadata.csv`, in column order.
#[derive(Serialize)]
struct SampleRow<'a> {
    country: &'a str,
    year: i64,
    source_file: &'a str,
    document_type_1: Option<&'a str>,
    document_type_2: Option<&'a str>,
    document_type_3: Option<&'a str>,
    title: String,
}

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

    /// Uniform index in `0..n`.
    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len())]
    }
}

const COUNTRIES: [&str; 6] = ["Kenya", "Ghana", "Uganda", "Rwanda", "Senegal", "Malawi"];

/// Ingestion rounds, plus a file outside the update mapping.
const SOURCE_FILES: [&str; 4] = [
    "task_2_metadata_1st_dedup.json",
    "task_2_metadata_2nd_filtered.json",
    "task_2_metadata_3rd_filtered.json",
    "task_2_metadata_manual.json",
];

/// Type 1 → type 2 → type 3 hierarchy.
const DOCUMENT_TYPES: [(&str, &[(&str, &[&str])]); 3] = [
    (
        "Budget",
        &[
            ("Executive Proposal", &["Main Document", "Supporting Document"]),
            ("Enacted Budget", &["Appropriation Act", "Budget Estimates"]),
            ("Citizens Budget", &[]),
        ],
    ),
    (
        "In-Year Report",
        &[
            ("Quarterly Report", &["Q1", "Q2", "Q3", "Q4"]),
            ("Mid-Year Review", &[]),
        ],
    ),
    (
        "Audit",
        &[("Year-End Report", &["Financial Statements"]), ("Audit Report", &[])],
    ),
];

fn main() {
    let mut rng = SimpleRng::new(42);
    let output_path = "merged_metadata.csv";
    let n_rows = 1200;

    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    for i in 0..n_rows {
        let country = *rng.pick(&COUNTRIES);
        let year = 2010 + rng.below(15) as i64;
        // Mostly mapped batches, roughly one row in twenty outside the mapping.
        let source_file = if rng.below(20) == 0 {
            SOURCE_FILES[3]
        } else {
            SOURCE_FILES[rng.below(3)]
        };

        // Some rows carry no classification at all.
        let (type_1, type_2, type_3) = if rng.below(10) == 0 {
            (None, None, None)
        } else {
            let (t1, subtypes) = *rng.pick(&DOCUMENT_TYPES);
            let (t2, leaves) = *rng.pick(subtypes);
            let t3 = if leaves.is_empty() {
                None
            } else {
                Some(*rng.pick(leaves))
            };
            (Some(t1), Some(t2), t3)
        };

        let row = SampleRow {
            country,
            year,
            source_file,
            document_type_1: type_1,
            document_type_2: type_2,
            document_type_3: type_3,
            title: format!("{country} {} {year} #{i}", type_2.unwrap_or("document")),
        };
        writer.serialize(row).expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output");

    println!(
        "Wrote {n_rows} documents across {} countries to {output_path}",
        COUNTRIES.len()
    );
}
