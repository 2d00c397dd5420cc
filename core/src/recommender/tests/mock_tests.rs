use crate::recommender::{ErrorKind, MockRecommender, Recommender, RecommenderFactory};
use std::time::Duration;

fn fast_mock() -> MockRecommender {
    MockRecommender::new().with_delay(Duration::from_millis(5))
}

#[tokio::test]
async fn test_mock_recommender_echoes_question() {
    let recommendation = tokio_test::assert_ok!(fast_mock().recommend("  gaming mouse ").await);

    assert!(recommendation.text.contains("\"gaming mouse\""));
    assert!(recommendation.elapsed >= Duration::from_millis(5));
}

#[tokio::test]
async fn test_mock_recommender_trigger_phrases() {
    let mock = fast_mock();
    let cases = [
        ("error", ErrorKind::Server),
        ("Network Error", ErrorKind::Connectivity),
        ("timeout", ErrorKind::Timeout),
        ("nothing", ErrorKind::NoRecommendation),
    ];

    for (input, expected) in cases {
        let err = tokio_test::assert_err!(mock.recommend(input).await);
        assert_eq!(err.kind(), expected, "input {input:?}");
    }
}

#[test]
fn test_factory_mock_info() {
    let recommender = RecommenderFactory::mock();
    assert_eq!(recommender.info().name, "Mock Recommender");
}
