use chrono::{Local, TimeZone};
use litreview_rs::arxiv::{build_search_url, parse_feed, SearchQuery};
use litreview_rs::config::{Config, LLMProvider};
use litreview_rs::exports::{latest_export, save_review};
use litreview_rs::review::orchestrator::{ReviewOrchestrator, ReviewRequest};
use litreview_rs::review::team::{Turn, TurnSource};
use std::fs;
use tempfile::TempDir;

const SAMPLE_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <entry>
    <id>http://arxiv.org/abs/1706.03762v7</id>
    <title>Attention Is All You Need</title>
    <summary>We propose the Transformer architecture.</summary>
    <published>2017-06-12T17:57:34Z</published>
    <author><name>Ashish Vaswani</name></author>
    <link title="pdf" href="http://arxiv.org/pdf/1706.03762v7" rel="related" type="application/pdf"/>
  </entry>
</feed>"#;

#[test]
fn test_arxiv_query_and_feed_pipeline() {
    let query = SearchQuery {
        text: "attention mechanisms".to_string(),
        max_results: 20,
    };
    let url = build_search_url("https://export.arxiv.org/api/query", &query);
    assert!(url.contains("search_query=all%3Aattention%20mechanisms"));
    assert!(url.contains("max_results=20"));

    let papers = parse_feed(SAMPLE_FEED).unwrap();
    assert_eq!(papers.len(), 1);
    assert_eq!(papers[0].title, "Attention Is All You Need");
    assert_eq!(papers[0].published, "2017-06-12");
    assert_eq!(papers[0].pdf_url, "http://arxiv.org/pdf/1706.03762v7");
}

#[test]
fn test_config_defaults_match_review_expectations() {
    let config = Config::default();

    assert_eq!(config.default_paper_count, 4);
    assert_eq!(config.llm.provider, LLMProvider::Gemini);
    assert_eq!(config.llm.model, "gemini-2.5-flash");
    assert_eq!(
        config.arxiv.api_base_url,
        "https://export.arxiv.org/api/query"
    );
}

#[test]
fn test_export_then_locate_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let export_dir = temp_dir.path().join("exports");

    let document = "### 📚 Literature Review on Transformers\n\ncontent";
    let ts = Local.with_ymd_and_hms(2025, 8, 30, 12, 0, 0).unwrap();
    let path = save_review(&export_dir, document, &ts).unwrap();

    let latest = latest_export(&export_dir).unwrap();
    assert_eq!(latest, path);
    assert_eq!(fs::read_to_string(&latest).unwrap(), document);
}

#[test]
fn test_task_prompt_embeds_topic_and_count() {
    let request = ReviewRequest {
        topic: "federated learning".to_string(),
        requested_paper_count: 6,
        model: "gemini-2.5-flash".to_string(),
    };

    let prompt = ReviewOrchestrator::build_task_prompt(&request);
    assert_eq!(
        prompt,
        "Conduct a literature review on **federated learning** and return exactly 6 papers."
    );
}

#[test]
fn test_final_document_aggregation() {
    let turns = vec![
        Turn {
            source: TurnSource::Retrieval,
            content: "[]".to_string(),
            sequence_index: 0,
        },
        Turn {
            source: TurnSource::Synthesis,
            content: "### 📚 Review\n".to_string(),
            sequence_index: 1,
        },
    ];

    assert_eq!(
        ReviewOrchestrator::collect_final_document(&turns),
        "### 📚 Review"
    );
}
