use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use heatgrid::data::matrix::Matrix;

/// Write synthetic RNG output matrices to try the viewer with.
#[derive(Parser, Debug)]
#[command(name = "generate_sample", version)]
struct Args {
    /// Output directory
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Rows per file (generator runs)
    #[arg(long, default_value_t = 10)]
    runs: usize,

    /// Values per row (work items)
    #[arg(long, default_value_t = 256)]
    width: usize,
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

    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }
}

// ---------------------------------------------------------------------------
// Work-item seeding
// ---------------------------------------------------------------------------

/// Hash applied to a work item's global id to get its seed. All three are
/// bijections on `u32`, so distinct ids give distinct seeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GidHash {
    None,
    Knuth,
    Xs1,
}

impl GidHash {
    const ALL: [GidHash; 3] = [GidHash::None, GidHash::Knuth, GidHash::Xs1];

    fn name(self) -> &'static str {
        match self {
            GidHash::None => "NONE",
            GidHash::Knuth => "KNUTH",
            GidHash::Xs1 => "XS1",
        }
    }

    fn apply(self, gid: u32) -> u32 {
        match self {
            GidHash::None => gid,
            GidHash::Knuth => gid.wrapping_mul(2654435761),
            GidHash::Xs1 => {
                let mut x = gid;
                x ^= x >> 16;
                x = x.wrapping_mul(0x7feb352d);
                x ^= x >> 15;
                x = x.wrapping_mul(0x846ca68b);
                x ^ (x >> 16)
            }
        }
    }
}

/// Where work-item seeds come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seeding {
    /// Hashed global id.
    Gid(GidHash),
    /// Drawn on the host from a Mersenne-Twister-like stream.
    Host,
}

impl Seeding {
    fn seeds(self, width: usize, rng: &mut SimpleRng) -> Vec<u32> {
        match self {
            Seeding::Gid(hash) => (0..width as u32).map(|gid| hash.apply(gid)).collect(),
            Seeding::Host => (0..width).map(|_| rng.next_u32()).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Per-work-item generators, one state per column.
#[derive(Debug, Clone, Copy)]
enum Generator {
    /// 32-bit LCG; visibly striped with unhashed sequential seeds.
    Lcg,
    /// 32-bit xorshift.
    Xorshift32,
    /// High quality reference.
    Xoshiro,
}

impl Generator {
    const ALL: [Generator; 3] = [Generator::Lcg, Generator::Xorshift32, Generator::Xoshiro];

    fn name(self) -> &'static str {
        match self {
            Generator::Lcg => "lcg",
            Generator::Xorshift32 => "xorshift32",
            Generator::Xoshiro => "xoshiro",
        }
    }

    /// `runs` values for each of `seeds`, one row per run.
    fn matrix(self, seeds: &[u32], runs: usize) -> Option<Matrix> {
        let mut states: Vec<u32> = match self {
            // xorshift is stuck at zero.
            Generator::Xorshift32 => seeds
                .iter()
                .map(|&s| if s == 0 { 0x9e3779b9 } else { s })
                .collect(),
            _ => seeds.to_vec(),
        };
        let mut reference = SimpleRng::new(seeds.first().copied().unwrap_or(0) as u64);

        let rows = (0..runs)
            .map(|_| {
                states
                    .iter_mut()
                    .map(|x| match self {
                        Generator::Lcg => {
                            *x = x.wrapping_mul(1664525).wrapping_add(1013904223);
                            *x
                        }
                        Generator::Xorshift32 => {
                            *x ^= *x << 13;
                            *x ^= *x >> 17;
                            *x ^= *x << 5;
                            *x
                        }
                        Generator::Xoshiro => reference.next_u32(),
                    })
                    .collect()
            })
            .collect();
        Matrix::from_rows(rows)
    }
}

/// Output name used by the RNG test program's `file-tsv` mode.
fn file_name(generator: Generator, seeding: Seeding) -> String {
    match seeding {
        Seeding::Gid(hash) => format!("out_{}_gid_{}.tsv", generator.name(), hash.name()),
        Seeding::Host => format!("out_{}_host_mt.tsv", generator.name()),
    }
}

fn seedings() -> impl Iterator<Item = Seeding> {
    GidHash::ALL
        .into_iter()
        .map(Seeding::Gid)
        .chain(std::iter::once(Seeding::Host))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut rng = SimpleRng::new(42);

    std::fs::create_dir_all(&args.dir)
        .with_context(|| format!("creating {}", args.dir.display()))?;

    let mut written = 0;
    for generator in Generator::ALL {
        for seeding in seedings() {
            let seeds = seeding.seeds(args.width, &mut rng);
            let matrix = generator
                .matrix(&seeds, args.runs)
                .context("--runs and --width must be non-zero")?;

            let name = file_name(generator, seeding);
            let path = args.dir.join(&name);
            std::fs::write(&path, matrix.to_delimited("\t"))
                .with_context(|| format!("writing {}", path.display()))?;
            log::info!("Wrote {name} ({}x{})", matrix.rows(), matrix.cols());
            written += 1;
        }
    }

    println!(
        "Wrote {written} matrices ({} runs x {} values) to {}",
        args.runs,
        args.width,
        args.dir.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use heatgrid::data::label::FileLabel;
    use heatgrid::data::matrix::parse_matrix;

    use super::*;

    fn columns(m: &Matrix) -> Vec<Vec<u32>> {
        (0..m.cols())
            .map(|c| (0..m.rows()).filter_map(|r| m.get(r, c)).collect())
            .collect()
    }

    #[test]
    fn gid_hashes_keep_ids_distinct() {
        for hash in GidHash::ALL {
            let seeds: HashSet<u32> = (0..1024).map(|gid| hash.apply(gid)).collect();
            assert_eq!(seeds.len(), 1024, "{}", hash.name());
        }
    }

    #[test]
    fn every_column_is_its_own_stream() {
        let mut rng = SimpleRng::new(7);
        for generator in Generator::ALL {
            for seeding in seedings() {
                let seeds = seeding.seeds(64, &mut rng);
                let m = generator.matrix(&seeds, 3).unwrap();
                assert_eq!((m.rows(), m.cols()), (3, 64));

                let distinct: HashSet<Vec<u32>> = columns(&m).into_iter().collect();
                assert_eq!(distinct.len(), 64, "{}", file_name(generator, seeding));
            }
        }
    }

    #[test]
    fn xorshift_never_sticks_at_zero() {
        let m = Generator::Xorshift32
            .matrix(&Seeding::Gid(GidHash::None).seeds(4, &mut SimpleRng::new(1)), 5)
            .unwrap();
        assert!(m.row_iter().flatten().all(|&v| v != 0));
    }

    #[test]
    fn zero_sized_requests_give_no_matrix() {
        assert!(Generator::Lcg.matrix(&[1, 2], 0).is_none());
        assert!(Generator::Lcg.matrix(&[], 3).is_none());
    }

    #[test]
    fn names_follow_the_producer() {
        assert_eq!(
            file_name(Generator::Lcg, Seeding::Gid(GidHash::Knuth)),
            "out_lcg_gid_KNUTH.tsv"
        );
        assert_eq!(
            file_name(Generator::Xoshiro, Seeding::Host),
            "out_xoshiro_host_mt.tsv"
        );
    }

    #[test]
    fn written_files_load_back_with_their_labels() {
        let mut rng = SimpleRng::new(3);
        for generator in Generator::ALL {
            for seeding in seedings() {
                let name = file_name(generator, seeding);
                let label = FileLabel::parse(&name).unwrap();
                assert_eq!(label.name, generator.name());

                let m = generator.matrix(&seeding.seeds(8, &mut rng), 2).unwrap();
                assert_eq!(parse_matrix(&m.to_delimited("\t")).unwrap(), m);
            }
        }
        let label = FileLabel::parse("out_xorshift32_gid_XS1.tsv").unwrap();
        assert_eq!(label.title(), "xorshift32, gid seeds (XS1)");
        let label = FileLabel::parse("out_lcg_host_mt.tsv").unwrap();
        assert_eq!(label.title(), "lcg, host seeds (mt)");
    }
}
