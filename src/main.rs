use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use ticketgen::config::{AppConfig, OutputFormat};
use ticketgen::data::{
    DocxFileSource, GeneratedSource, JsonFileSource, OpenAiChatGenerator, QuestionSource,
    TextFileSource,
};
use ticketgen::render::{renderer_for, OutputWriter};
use ticketgen::TicketGenerator;

const USAGE: &str = "Usage: ticketgen (--questions <file> | --topic <text>) --tickets <n> \
[--config <file>] [--format docx|latex|text|json] [--seed <n>] [--out <dir>] [--pdf]";

#[derive(Debug, Default)]
struct CliArgs {
    questions: Option<PathBuf>,
    topic: Option<String>,
    tickets: Option<usize>,
    config: Option<PathBuf>,
    format: Option<OutputFormat>,
    seed: Option<u64>,
    out: Option<PathBuf>,
    pdf: bool,
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut iter = args.iter();

    while let Some(flag) = iter.next() {
        let mut value = || {
            iter.next()
                .cloned()
                .with_context(|| format!("Missing value for {}", flag))
        };
        match flag.as_str() {
            "--questions" => parsed.questions = Some(PathBuf::from(value()?)),
            "--topic" => parsed.topic = Some(value()?),
            "--tickets" => parsed.tickets = Some(value()?.parse().context("--tickets expects a number")?),
            "--config" => parsed.config = Some(PathBuf::from(value()?)),
            "--format" => parsed.format = Some(value()?.parse()?),
            "--seed" => parsed.seed = Some(value()?.parse().context("--seed expects a number")?),
            "--out" => parsed.out = Some(PathBuf::from(value()?)),
            "--pdf" => parsed.pdf = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            other => bail!("Unknown argument '{}'\n{}", other, USAGE),
        }
    }
    Ok(parsed)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let cli = parse_args(&args)?;

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        config.search = config.search.with_seed(seed);
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(out) = cli.out {
        config.output.directory = out;
    }
    if cli.pdf {
        config.output.format = OutputFormat::Latex;
        config.output.compile_pdf = true;
    }
    config.validate()?;

    let ticket_count = cli.tickets.with_context(|| format!("--tickets is required\n{}", USAGE))?;
    let generator = TicketGenerator::new(config.search.clone())?;

    let source: Box<dyn QuestionSource> = match (cli.questions, cli.topic) {
        (Some(path), None) => match path.extension().and_then(|e| e.to_str()) {
            Some("docx") => Box::new(DocxFileSource::new(path)),
            Some("json") => Box::new(JsonFileSource::new(path)),
            _ => Box::new(TextFileSource::new(path)),
        },
        (None, Some(topic)) => {
            let count = config
                .source
                .requested_count(ticket_count, config.search.ticket_size);
            let llm = OpenAiChatGenerator::new(config.llm.clone())?;
            Box::new(GeneratedSource::new(llm, topic, count)?)
        }
        _ => bail!("Exactly one of --questions or --topic is required\n{}", USAGE),
    };

    let questions = generator.load_pool(source.as_ref(), &config.source, ticket_count)?;
    let tickets = generator.generate(&questions, ticket_count)?;
    log::info!(
        "Assembled {} ticket(s), fitness {:.4}, seed {}",
        tickets.len(),
        tickets.fitness,
        tickets.seed
    );

    let renderer = renderer_for(config.output.format);
    let artifact = OutputWriter::new(config.output.clone()).write(&tickets, renderer.as_ref())?;
    println!("{}", artifact.document.display());
    if let Some(pdf) = artifact.pdf {
        println!("{}", pdf.display());
    }

    Ok(())
}
