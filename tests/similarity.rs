use ticketgen::engines::generation::FitnessEvaluator;
use ticketgen::engines::similarity::SimilarityModel;
use ticketgen::TicketError;

fn texts(items: &[&str]) -> Vec<String> {
    items.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_similarity_is_repeatable_and_reflexive() {
    let pool = texts(&[
        "Explain the producer consumer problem",
        "Describe the dining philosophers problem",
        "What does a linker do?",
        "",
    ]);
    let model = SimilarityModel::fit(&pool).unwrap();

    for i in 0..model.len() {
        assert_eq!(model.similarity(i, i), 1.0);
        for j in 0..model.len() {
            let first = model.similarity(i, j);
            assert_eq!(first, model.similarity(i, j));
            assert!((0.0..=1.0).contains(&first));
        }
    }
}

#[test]
fn test_identical_questions_are_fully_similar() {
    let pool = texts(&[
        "What is a page fault?",
        "Describe the boot process",
        "What is a page fault?",
    ]);
    let model = SimilarityModel::fit(&pool).unwrap();
    let evaluator = FitnessEvaluator::new(&model);

    assert_eq!(model.similarity(0, 2), 1.0);
    assert_eq!(evaluator.ticket_fitness(&[0, 2]), 0.0);
    assert_eq!(evaluator.ticket_fitness(&[2, 0]), 0.0);
    assert!(evaluator.ticket_fitness(&[0, 1]) > 0.0);
}

#[test]
fn test_degenerate_pools_are_invalid_input() {
    assert!(matches!(
        SimilarityModel::fit(&texts(&[])),
        Err(TicketError::InvalidInput(_))
    ));
    assert!(matches!(
        SimilarityModel::fit(&texts(&["only one"])),
        Err(TicketError::InvalidInput(_))
    ));
    assert!(matches!(
        SimilarityModel::fit(&texts(&["same", " same ", ""])),
        Err(TicketError::InvalidInput(_))
    ));
}

#[test]
fn test_common_words_weigh_less_than_rare_ones() {
    // "process" appears everywhere; "zombie" only in two questions
    let pool = texts(&[
        "process zombie",
        "process zombie",
        "process fork",
        "process exec",
    ]);
    let model = SimilarityModel::fit(&pool).unwrap();

    let shared_rare = model.similarity(0, 1);
    let shared_common = model.similarity(0, 2);
    assert_eq!(shared_rare, 1.0);
    assert!(shared_common < 0.5);
    assert!(shared_common > 0.0);
}
