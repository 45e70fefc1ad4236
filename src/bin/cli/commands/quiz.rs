use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use swot::{generate_questions_with, GeneratorConfig};

use crate::render;
use crate::OutputFormat;

pub fn run(
    text: &str,
    count: usize,
    config: &GeneratorConfig,
    seed: Option<u64>,
    format: &OutputFormat,
) -> Result<()> {
    let questions = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_questions_with(text, count, config, &mut rng)
        }
        None => generate_questions_with(text, count, config, &mut rand::thread_rng()),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&questions)?),
        OutputFormat::Plain => render::questions(&questions),
    }

    Ok(())
}
