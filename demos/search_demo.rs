use std::env;
use ticketgen::config::SearchConfig;
use ticketgen::data::{QuestionSource, TextFileSource};
use ticketgen::engines::generation::{GenerationStats, ProgressCallback};
use ticketgen::TicketGenerator;

/// CLI progress callback with formatted output
struct CliProgressCallback {
    start_time: std::time::Instant,
}

impl ProgressCallback for CliProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, generation: usize, stats: &GenerationStats) {
        println!(
            "✓ Generation {}: Best = {:.4}, Mean = {:.4}, Time = {:.2}s",
            generation + 1,
            stats.best_fitness,
            stats.mean_fitness,
            self.start_time.elapsed().as_secs_f64()
        );
    }
}

const SAMPLE_QUESTIONS: &[&str] = &[
    "What is an operating system kernel?",
    "Describe the states of a process",
    "Compare preemptive and cooperative scheduling",
    "What is a race condition?",
    "Explain how a semaphore works",
    "What is virtual memory?",
    "Describe page replacement algorithms",
    "How does a file system allocate disk blocks?",
    "What is a deadlock and how can it be avoided?",
    "Explain the role of interrupts",
    "What is a system call?",
    "Describe inter-process communication mechanisms",
];

fn main() -> anyhow::Result<()> {
    println!("=== Ticket Search Demo ===\n");

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let tickets = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);
    let population_size = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);
    let generations = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(50);
    let seed = args.get(4).and_then(|s| s.parse().ok()).unwrap_or(42);

    let questions: Vec<String> = match args.get(5) {
        Some(path) => TextFileSource::new(path).load()?,
        None => SAMPLE_QUESTIONS.iter().map(|q| q.to_string()).collect(),
    };

    println!("Configuration:");
    println!("  Questions: {}", questions.len());
    println!("  Tickets: {}", tickets);
    println!("  Population size: {}", population_size);
    println!("  Generations: {}", generations);
    println!("  Seed: {}", seed);
    println!();

    let config = SearchConfig {
        population_size,
        generations,
        ..Default::default()
    };
    let generator = TicketGenerator::new(config)?;
    let mut callback = CliProgressCallback {
        start_time: std::time::Instant::now(),
    };
    let (ticket_set, _) = generator.generate_with(&questions, tickets, seed, &mut callback, None)?;

    println!("\nFitness: {:.4}\n", ticket_set.fitness);
    for (i, ticket) in ticket_set.tickets.iter().enumerate() {
        println!("Ticket {}:", i + 1);
        for question in ticket {
            println!("  - {}", question);
        }
    }
    Ok(())
}
