//! tokenomics — token estimation, cost and speed calculator
//!
//! Usage:
//!   tokenomics estimate [model] <text ...>               Estimate tokens (one argument is text)
//!   tokenomics estimate [--model <id>] [--file <path>]   Estimate a file, or stdin
//!   tokenomics cost <model> <tokens> [--output]          Price a token count
//!   tokenomics time <model> <tokens>                     Time to generate output tokens
//!   tokenomics energy <model> <tokens>                   Inference energy and CO2
//!   tokenomics compare <tokens> <model>...               Rank models by generation time
//!   tokenomics info <model>                              Tokenization scheme and pricing
//!   tokenomics models                                    List catalog models by provider

use std::io::Read;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use token_economics::calc::{
    analyze_text, calculate_cost_in, calculate_total_time, compare_providers, estimate_energy,
    TimingEstimate,
};
use token_economics::tokens::estimate_breakdown;
use token_economics::{tokenization_info, EstimatorConfig, ModelCatalog};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let result = match args[1].as_str() {
        "estimate" => cmd_estimate(&args[2..]),
        "cost" => cmd_cost(&args[2..]),
        "time" => cmd_time(&args[2..]),
        "energy" => cmd_energy(&args[2..]),
        "compare" => cmd_compare(&args[2..]),
        "info" => cmd_info(&args[2..]),
        "models" => cmd_models(&args[2..]),
        "version" | "--version" | "-V" => {
            cmd_version();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"tokenomics — token estimation, cost and speed calculator

USAGE:
    tokenomics <COMMAND> [OPTIONS]

COMMANDS:
    estimate [model] <text ...>               Estimate tokens; a single argument is the text
    estimate [--model <id>] [--file <path>]   Estimate a file, or stdin when neither text nor file
    cost <model> <tokens> [--output]          Price a token count as input (or output)
    time <model> <tokens>                     Seconds to generate <tokens> output tokens
    energy <model> <tokens>                   Inference energy, CO2 and provider comparison
    compare <tokens> <model>...               Rank models by generation time
    info <model>                              Tokenization scheme, overhead and pricing
    models                                    List catalog models grouped by provider
    version                                   Show version information
    help                                      Show this help message

OPTIONS:
    --catalog <path>                          YAML/JSON catalog overrides
    --model <id>                              Model for estimate (all positionals are text)

ENVIRONMENT:
    TOKENOMICS_DEFAULT_MODEL                  Model used when none is given (gpt-4o)
    TOKENOMICS_CATALOG                        Catalog override file
    RUST_LOG                                  Log filter (default: warn)"#
    );
}

fn cmd_version() {
    println!("tokenomics {}", env!("CARGO_PKG_VERSION"));
}

/// Split `--flag value` options out of the positional arguments.
struct Parsed {
    positional: Vec<String>,
    catalog: Option<PathBuf>,
    file: Option<PathBuf>,
    model: Option<String>,
    output: bool,
}

fn parse_args(args: &[String]) -> anyhow::Result<Parsed> {
    let mut parsed = Parsed {
        positional: Vec::new(),
        catalog: None,
        file: None,
        model: None,
        output: false,
    };
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--catalog" => {
                let path = iter.next().ok_or_else(|| anyhow!("--catalog needs a path"))?;
                parsed.catalog = Some(PathBuf::from(path));
            }
            "--file" => {
                let path = iter.next().ok_or_else(|| anyhow!("--file needs a path"))?;
                parsed.file = Some(PathBuf::from(path));
            }
            "--model" => {
                let model = iter.next().ok_or_else(|| anyhow!("--model needs a model id"))?;
                parsed.model = Some(model.clone());
            }
            "--output" => parsed.output = true,
            _ => parsed.positional.push(arg.clone()),
        }
    }
    Ok(parsed)
}

fn load_config(parsed: &Parsed) -> anyhow::Result<(EstimatorConfig, ModelCatalog)> {
    let mut config = EstimatorConfig::from_env();
    if let Some(ref path) = parsed.catalog {
        config = config.with_catalog_path(path);
    }
    let catalog = config.catalog().context("loading model catalog")?;
    Ok((config, catalog))
}

fn parse_tokens(s: &str) -> anyhow::Result<u64> {
    s.parse::<u64>()
        .with_context(|| format!("'{s}' is not a token count"))
}

/// Model and inline text for `estimate`.
///
/// Without `--model` or `--file`, a lone positional is the text and two or
/// more start with the model. `None` text means read stdin or the file.
fn estimate_target(parsed: &Parsed, default_model: &str) -> (String, Option<String>) {
    let join = |words: &[String]| (!words.is_empty()).then(|| words.join(" "));
    let positional = parsed.positional.as_slice();
    if let Some(ref model) = parsed.model {
        return (model.clone(), join(positional));
    }
    match positional {
        [] => (default_model.to_string(), None),
        [text] if parsed.file.is_none() => (default_model.to_string(), Some(text.clone())),
        [model, rest @ ..] => (model.clone(), join(rest)),
    }
}

fn cmd_estimate(args: &[String]) -> anyhow::Result<()> {
    let parsed = parse_args(args)?;
    let (config, catalog) = load_config(&parsed)?;

    let (model, inline) = estimate_target(&parsed, &config.default_model);
    let text = if let Some(ref path) = parsed.file {
        if inline.is_some() {
            bail!("give either text or --file, not both");
        }
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    } else if let Some(text) = inline {
        text
    } else {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        buf
    };

    let analysis = analyze_text(&text, &model, &catalog);
    println!("Model:            {}", analysis.model);
    println!("Scheme:           {}", analysis.tokenization.scheme);
    println!("Characters:       {}", analysis.chars);
    println!("Tokens:           {}", analysis.tokens);
    println!("Chars per token:  {:.2}", analysis.chars_per_token);
    if let Some(b) = estimate_breakdown(&text, &model) {
        println!(
            "Breakdown:        words {} / punctuation {} / special {} / numeric {} (x{:.2} script, +{} overhead)",
            b.word_tokens,
            b.punctuation_tokens,
            b.special_char_tokens,
            b.numeric_tokens,
            b.language_multiplier,
            b.overhead
        );
    }
    if catalog.pricing(&model).is_some() {
        println!("Input cost:       ${:.6}", analysis.input_cost);
        println!("Output cost:      ${:.6}", analysis.output_cost);
    } else {
        println!("Cost:             unknown (no pricing for '{}')", model);
    }
    Ok(())
}

fn cmd_cost(args: &[String]) -> anyhow::Result<()> {
    let parsed = parse_args(args)?;
    let (_, catalog) = load_config(&parsed)?;
    let [model, tokens] = parsed.positional.as_slice() else {
        bail!("usage: tokenomics cost <model> <tokens> [--output]");
    };
    let tokens = parse_tokens(tokens)?;
    if catalog.pricing(model).is_none() {
        bail!("no pricing data for model '{model}'");
    }
    let cost = calculate_cost_in(&catalog, tokens, model, parsed.output);
    let kind = if parsed.output { "output" } else { "input" };
    println!("{tokens} {kind} tokens on {model}: ${cost:.6}");
    Ok(())
}

fn cmd_time(args: &[String]) -> anyhow::Result<()> {
    let parsed = parse_args(args)?;
    let (_, catalog) = load_config(&parsed)?;
    let [model, tokens] = parsed.positional.as_slice() else {
        bail!("usage: tokenomics time <model> <tokens>");
    };
    let tokens = parse_tokens(tokens)?;
    let total = calculate_total_time(tokens, model, &catalog)?;
    println!("{tokens} output tokens on {model}: {total:.2}s");
    Ok(())
}

fn cmd_energy(args: &[String]) -> anyhow::Result<()> {
    let parsed = parse_args(args)?;
    let [model, tokens] = parsed.positional.as_slice() else {
        bail!("usage: tokenomics energy <model> <tokens>");
    };
    let tokens = parse_tokens(tokens)?;
    let e = estimate_energy(tokens, model);
    let provider = if e.default_profile {
        format!("{} (industry average figures)", e.provider)
    } else {
        e.provider.clone()
    };
    println!("Model:               {model}");
    println!("Provider:            {provider}");
    println!("Energy:              {:.6} kWh", e.kwh);
    println!("Carbon:              {:.6} g CO2", e.co2_grams);
    println!("Smartphone charges:  {:.4}", e.smartphone_charges);
    println!("LED bulb hours:      {:.4}", e.led_bulb_hours);
    println!();
    println!("{:<12} {:>14} {:>14}", "PROVIDER", "KWH", "G CO2");
    for p in compare_providers(tokens) {
        println!("{:<12} {:>14.6} {:>14.6}", p.provider, p.kwh, p.co2_grams);
    }
    Ok(())
}

fn cmd_compare(args: &[String]) -> anyhow::Result<()> {
    let parsed = parse_args(args)?;
    let (_, catalog) = load_config(&parsed)?;
    let Some((tokens, models)) = parsed.positional.split_first() else {
        bail!("usage: tokenomics compare <tokens> <model>...");
    };
    let tokens = parse_tokens(tokens)?;
    let models: Vec<&str> = if models.is_empty() {
        catalog.speed_models()
    } else {
        models.iter().map(String::as_str).collect()
    };

    let ranked = TimingEstimate::compare(models, tokens, &catalog);
    if ranked.is_empty() {
        bail!("none of the given models has speed data");
    }
    println!("{:<20} {:>10} {:>10} {:>10}", "MODEL", "LATENCY", "TOK/S", "TOTAL");
    for t in ranked {
        println!(
            "{:<20} {:>9.2}s {:>10.1} {:>9.2}s",
            t.model, t.first_token_secs, t.tokens_per_second, t.total_secs
        );
    }
    Ok(())
}

fn cmd_info(args: &[String]) -> anyhow::Result<()> {
    let parsed = parse_args(args)?;
    let (_, catalog) = load_config(&parsed)?;
    let Some(model) = parsed.positional.first() else {
        bail!("usage: tokenomics info <model>");
    };

    let info = tokenization_info(model);
    println!("Model:     {model}");
    println!("Scheme:    {}", info.scheme);
    println!("Overhead:  {} tokens", info.overhead);
    match catalog.get(model) {
        Some(entry) => {
            println!("Provider:  {}", entry.provider);
            if let Some((input, output)) = entry.pricing() {
                println!("Pricing:   ${input} in / ${output} out per 1K tokens");
            }
            if let Some(ms) = entry.first_token_latency_ms {
                println!("Latency:   {ms} ms to first token");
            }
            if let Some(tps) = entry.tokens_per_second {
                println!("Speed:     {tps} tokens/s");
            }
        }
        None => println!("Catalog:   not listed"),
    }
    Ok(())
}

fn cmd_models(args: &[String]) -> anyhow::Result<()> {
    let parsed = parse_args(args)?;
    let (_, catalog) = load_config(&parsed)?;
    for (provider, models) in catalog.categories() {
        println!("{provider}");
        for m in models {
            println!("  {m}");
        }
    }
    let speed = catalog.speed_models();
    if !speed.is_empty() {
        println!("\nWith speed data: {}", speed.join(", "));
    }
    Ok(())
}
