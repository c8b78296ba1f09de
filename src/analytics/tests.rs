//! Analytics Module Tests
//!
//! Validates tag extraction, the three counting strategies and sentiment tallies.
//!
//! ## Test Scopes
//! - **Tokenizer**: Well-formed blobs are normalized; malformed ones collapse to nothing.
//! - **Strategies**: Sequential, partitioned and hybrid runs agree on the counter.
//! - **Failures**: A failing worker fails the whole partitioned call.
//! - **Metrics**: Throughput/latency definitions and the empty-input case.

#[cfg(test)]
mod tests {
    use crate::analytics::partitioned::partition_round_robin;
    use crate::analytics::sentiment::classify;
    use crate::analytics::tokenizer::{extract_tags, normalize_tag};
    use crate::analytics::types::{FrequencyCounter, Measured, Sentiment, TagList};
    use crate::analytics::{
        HybridAggregator, PartitionedAggregator, SentimentClassifier, SequentialAggregator,
    };
    use crate::error::AggregationError;
    use crate::storage::types::TweetRow;
    use std::time::Duration;

    fn sample_blobs() -> Vec<String> {
        vec![
            "['COVID19', 'lockdown']".to_string(),
            "['covid19']".to_string(),
            "not a list".to_string(),
            "[\"Vaccine\", 'covid19', '  ']".to_string(),
            "[]".to_string(),
            "['StayHome', 'Lockdown ', 'vaccine']".to_string(),
            "['india']".to_string(),
            "['covid19', 'india', 'covid19']".to_string(),
            "['unterminated".to_string(),
        ]
    }

    fn row(hashtags: Option<&str>, description: Option<&str>) -> TweetRow {
        TweetRow {
            hashtags: hashtags.map(str::to_string),
            user_description: description.map(str::to_string),
            ..TweetRow::default()
        }
    }

    fn panicking_extractor(raw: &str) -> TagList {
        if raw.contains("poison") {
            panic!("cannot extract poisoned blob");
        }
        extract_tags(raw)
    }

    // ============================================================
    // TOKENIZER TESTS
    // ============================================================

    #[test]
    fn test_extract_normalizes_tokens() {
        let tags = extract_tags("['A', ' b ', 'A']");
        assert_eq!(tags, vec!["a", "b", "a"]);

        let counter: FrequencyCounter = tags.iter().collect();
        assert_eq!(counter.get("a"), 2);
        assert_eq!(counter.get("b"), 1);
        assert_eq!(counter.len(), 2);
    }

    #[test]
    fn test_extract_malformed_is_empty() {
        assert!(extract_tags("not a list").is_empty());
        assert!(extract_tags("").is_empty());
        assert!(extract_tags("['a'").is_empty());
        assert!(extract_tags("['a' 'b']").is_empty());
        assert!(extract_tags("[a, b]").is_empty());
        assert!(extract_tags("[['a']]").is_empty());
        assert!(extract_tags("['a'] trailing").is_empty());
        assert!(extract_tags("[,]").is_empty());
        assert!(extract_tags("['a',,'b']").is_empty());
    }

    #[test]
    fn test_extract_accepts_both_quotes_and_trailing_comma() {
        assert_eq!(extract_tags("  [\"One\", 'Two',]  "), vec!["one", "two"]);
        assert_eq!(extract_tags("[ ]"), Vec::<String>::new());
    }

    #[test]
    fn test_extract_handles_escapes() {
        assert_eq!(extract_tags(r"['it\'s', 'a,b']"), vec!["it's", "a,b"]);
    }

    #[test]
    fn test_extract_drops_blank_tokens() {
        assert_eq!(extract_tags("['', '   ', 'x']"), vec!["x"]);
    }

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag("  CoVid "), Some("covid".to_string()));
        assert_eq!(normalize_tag(" \t "), None);
    }

    // ============================================================
    // FREQUENCY COUNTER TESTS
    // ============================================================

    #[test]
    fn test_counter_merge_is_commutative() {
        let a: FrequencyCounter = ["x", "y", "x"].iter().map(|s| s.to_string()).collect();
        let b: FrequencyCounter = ["y", "z"].iter().map(|s| s.to_string()).collect();

        let mut ab = a.clone();
        ab.merge(b.clone());
        let mut ba = b;
        ba.merge(a);

        assert_eq!(ab, ba);
        assert_eq!(ab.get("x"), 2);
        assert_eq!(ab.get("y"), 2);
        assert_eq!(ab.get("z"), 1);
        assert_eq!(ab.total(), 5);
    }

    #[test]
    fn test_most_common_orders_by_count_then_tag() {
        let counter: FrequencyCounter = ["b", "a", "c", "c", "b", "c"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let top = counter.most_common(2);
        assert_eq!(top, vec![("c".to_string(), 3), ("b".to_string(), 2)]);

        let all = counter.most_common(10);
        assert_eq!(all.len(), 3);
        assert_eq!(all[2], ("a".to_string(), 1));
    }

    // ============================================================
    // PARTITIONING TESTS
    // ============================================================

    #[test]
    fn test_round_robin_is_disjoint_and_exhaustive() {
        let items: Vec<usize> = (0..10).collect();
        let slices = partition_round_robin(&items, 3);

        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0], vec![0, 3, 6, 9]);
        assert_eq!(slices[1], vec![1, 4, 7]);
        assert_eq!(slices[2], vec![2, 5, 8]);

        let mut rejoined: Vec<usize> = slices.into_iter().flatten().collect();
        rejoined.sort();
        assert_eq!(rejoined, items);
    }

    #[test]
    fn test_round_robin_more_parts_than_items() {
        let slices = partition_round_robin(&["a", "b"], 4);

        assert_eq!(slices.len(), 4);
        assert_eq!(slices.iter().map(Vec::len).sum::<usize>(), 2);
        assert!(slices[2].is_empty() && slices[3].is_empty());
    }

    #[test]
    fn test_round_robin_zero_parts() {
        let slices = partition_round_robin(&["a", "b"], 0);
        assert!(slices.is_empty());
    }

    // ============================================================
    // STRATEGY AGREEMENT TESTS
    // ============================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_partitioned_matches_sequential_for_any_worker_count() {
        let blobs = sample_blobs();
        let expected = SequentialAggregator::new().run(&blobs).output;

        assert_eq!(expected.get("covid19"), 5);
        assert_eq!(expected.get("lockdown"), 2);
        assert_eq!(expected.get("vaccine"), 2);

        for workers in [1, 2, 4, 8] {
            let result = PartitionedAggregator::new(workers).run(&blobs).await.unwrap();
            assert_eq!(
                result.output, expected,
                "{} workers should match the sequential counter",
                workers
            );
        }
    }

    #[tokio::test]
    async fn test_partitioned_rejects_zero_workers() {
        let result = PartitionedAggregator::new(0).run(&sample_blobs()).await;
        assert!(matches!(result, Err(AggregationError::InvalidWorkerCount)));
    }

    #[tokio::test]
    async fn test_partitioned_worker_failure_is_fatal() {
        let mut blobs = sample_blobs();
        blobs.push("['poison']".to_string());

        let aggregator = PartitionedAggregator::with_extractor(3, panicking_extractor);
        let result = aggregator.run(&blobs).await;

        match result {
            Err(AggregationError::WorkerFailure { worker, reason }) => {
                // index 9 lands on worker 9 % 3
                assert_eq!(worker, 0);
                assert!(reason.contains("poisoned"));
            }
            other => panic!("expected worker failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_hybrid_tagset_matches_sequential() {
        let batch = vec![
            row(Some("['Covid19', 'Masks']"), Some("Great news today")),
            row(None, Some("worst week ever")),
            row(Some("['covid19']"), None),
            row(Some("garbage"), Some("just okay")),
            row(None, None),
        ];
        let blobs: Vec<String> = batch.iter().filter_map(|r| r.hashtags.clone()).collect();
        let expected = SequentialAggregator::new().run(&blobs).output;

        let result = HybridAggregator::new(PartitionedAggregator::new(2))
            .run(&batch)
            .await
            .unwrap();

        assert_eq!(result.output.tagset.output, expected);
        assert_eq!(result.output.moodset.output.positive, 1);
        assert_eq!(result.output.moodset.output.negative, 1);
    }

    #[tokio::test]
    async fn test_hybrid_overall_metrics_use_full_batch() {
        let batch: Vec<TweetRow> = (0..50)
            .map(|i| {
                if i % 2 == 0 {
                    row(Some("['a', 'b']"), None)
                } else {
                    row(None, Some("good"))
                }
            })
            .collect();

        let result = HybridAggregator::new(PartitionedAggregator::new(4))
            .run(&batch)
            .await
            .unwrap();

        let secs = result.duration_secs();
        if secs > 0.0 {
            assert_eq!(result.throughput, batch.len() as f64 / secs);
            assert_eq!(result.latency, secs / batch.len() as f64);
        } else {
            assert_eq!(result.throughput, 0.0);
        }
        assert_eq!(result.output.tagset.output.get("a"), 25);
        assert_eq!(result.output.moodset.output.positive, 25);
    }

    #[tokio::test]
    async fn test_hybrid_surfaces_tag_worker_failure() {
        let batch = vec![row(Some("['poison']"), Some("good"))];
        let hybrid = HybridAggregator::new(PartitionedAggregator::with_extractor(
            1,
            panicking_extractor,
        ));

        let result = hybrid.run(&batch).await;
        assert!(matches!(
            result,
            Err(AggregationError::WorkerFailure { worker: 0, .. })
        ));
    }

    // ============================================================
    // SENTIMENT TESTS
    // ============================================================

    #[test]
    fn test_sentiment_positive_wins_tie() {
        let tally = SentimentClassifier::new().run(&["great but bad day"]).output;
        assert_eq!(tally.positive, 1);
        assert_eq!(tally.negative, 0);
    }

    #[test]
    fn test_sentiment_neither() {
        let tally = SentimentClassifier::new().run(&["just okay"]).output;
        assert_eq!(tally.positive, 0);
        assert_eq!(tally.negative, 0);
    }

    #[test]
    fn test_sentiment_is_case_insensitive_substring() {
        assert_eq!(classify("GOODNESS"), Some(Sentiment::Positive));
        assert_eq!(classify("the Worst"), Some(Sentiment::Negative));
        assert_eq!(classify("badge collector"), Some(Sentiment::Negative));
        assert_eq!(classify("neutral"), None);
    }

    // ============================================================
    // METRICS & EMPTY INPUT TESTS
    // ============================================================

    #[test]
    fn test_measured_guards_zero_denominators() {
        let zero_time = Measured::timed((), 10, Duration::ZERO);
        assert_eq!(zero_time.throughput, 0.0);
        assert_eq!(zero_time.latency, 0.0);

        let zero_records = Measured::timed((), 0, Duration::from_secs(2));
        assert_eq!(zero_records.throughput, 0.0);
        assert_eq!(zero_records.latency, 0.0);

        let normal = Measured::timed((), 4, Duration::from_secs(2));
        assert_eq!(normal.throughput, 2.0);
        assert_eq!(normal.latency, 0.5);
    }

    #[tokio::test]
    async fn test_empty_input_returns_zeroes_everywhere() {
        let empty_blobs: Vec<String> = Vec::new();

        let sequential = SequentialAggregator::new().run(&empty_blobs);
        assert!(sequential.output.is_empty());
        assert_eq!(sequential.duration, Duration::ZERO);
        assert_eq!(sequential.throughput, 0.0);
        assert_eq!(sequential.latency, 0.0);

        let partitioned = PartitionedAggregator::new(4).run(&empty_blobs).await.unwrap();
        assert!(partitioned.output.is_empty());
        assert_eq!(partitioned.duration, Duration::ZERO);

        let mood = SentimentClassifier::new().run(&empty_blobs);
        assert_eq!(mood.output.positive + mood.output.negative, 0);
        assert_eq!(mood.latency, 0.0);

        let hybrid = HybridAggregator::new(PartitionedAggregator::new(2))
            .run(&[])
            .await
            .unwrap();
        assert!(hybrid.output.tagset.output.is_empty());
        assert_eq!(hybrid.duration, Duration::ZERO);
        assert_eq!(hybrid.throughput, 0.0);
        assert_eq!(hybrid.latency, 0.0);
    }
}
