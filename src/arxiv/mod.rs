//! arXiv文献检索客户端 - 查询arXiv API并解析Atom响应

use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::config::ArxivConfig;

const USER_AGENT: &str = "litreview-rs/0.1 (https://github.com/sopaco/litreview-rs)";

/// 检索到的论文记录，获取后不再修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperRecord {
    pub title: String,
    /// 作者顺序保留arXiv返回的顺序，不做去重
    pub authors: Vec<String>,
    /// 发布日期，天级精度（YYYY-MM-DD）
    pub published: String,
    /// 论文摘要
    pub summary: String,
    pub pdf_url: String,
}

/// 单次检索请求，每次运行临时构造
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub text: String,
    pub max_results: usize,
}

/// 文献检索错误
#[derive(Debug, thiserror::Error)]
pub enum ArxivError {
    #[error("arXiv请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("arXiv返回异常状态码: {0}")]
    Status(reqwest::StatusCode),

    #[error("arXiv返回数据格式异常: {0}")]
    Malformed(String),
}

/// arXiv查询客户端
pub struct ArxivClient {
    client: reqwest::Client,
    config: ArxivConfig,
    last_request: Mutex<Option<Instant>>,
}

impl ArxivClient {
    /// 创建新的arXiv客户端
    pub fn new(config: ArxivConfig) -> Result<Self, ArxivError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            config,
            last_request: Mutex::new(None),
        })
    }

    /// 按相关性检索论文，保留arXiv返回的排序
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<PaperRecord>, ArxivError> {
        self.rate_limit().await;

        let url = build_search_url(&self.config.api_base_url, query);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ArxivError::Status(status));
        }

        let body = response.text().await?;
        let papers = parse_feed(&body)?;
        println!("   📄 arXiv返回 {} 篇候选论文", papers.len());
        Ok(papers)
    }

    /// 保证相邻两次请求之间的最小间隔
    async fn rate_limit(&self) {
        let wait_duration = {
            let last = self.last_request.lock().unwrap();
            let interval = Duration::from_millis(self.config.request_interval_ms);
            if let Some(instant) = *last {
                let elapsed = instant.elapsed();
                if elapsed < interval {
                    Some(interval - elapsed)
                } else {
                    None
                }
            } else {
                None
            }
        }; // MutexGuard在任何.await之前释放

        if let Some(wait) = wait_duration {
            tokio::time::sleep(wait).await;
        }

        let mut last = self.last_request.lock().unwrap();
        *last = Some(Instant::now());
    }
}

/// 构造arXiv检索URL，固定按相关性排序
pub fn build_search_url(base_url: &str, query: &SearchQuery) -> String {
    let search_query = format!("all:{}", query.text);

    format!(
        "{}?search_query={}&start=0&max_results={}&sortBy=relevance&sortOrder=descending",
        base_url,
        urlencoding::encode(&search_query),
        query.max_results,
    )
}

/// 解析arXiv Atom响应，任一entry格式异常则整体失败
pub fn parse_feed(xml: &str) -> Result<Vec<PaperRecord>, ArxivError> {
    let mut papers = Vec::new();
    for entry in extract_entries(xml) {
        papers.push(parse_entry(&entry)?);
    }
    Ok(papers)
}

/// 提取所有 <entry>...</entry> 块
fn extract_entries(xml: &str) -> Vec<String> {
    let mut entries = Vec::new();
    let mut search_from = 0;

    loop {
        let start_tag = "<entry>";
        let end_tag = "</entry>";

        let start = match xml[search_from..].find(start_tag) {
            Some(pos) => search_from + pos,
            None => break,
        };

        let end = match xml[start..].find(end_tag) {
            Some(pos) => start + pos + end_tag.len(),
            None => break,
        };

        entries.push(xml[start..end].to_string());
        search_from = end;
    }

    entries
}

/// 将单个entry块解析为论文记录
fn parse_entry(entry: &str) -> Result<PaperRecord, ArxivError> {
    let id_url = extract_tag_text(entry, "id")
        .ok_or_else(|| ArxivError::Malformed("entry缺少id字段".to_string()))?;
    let title = extract_tag_text(entry, "title")
        .map(|raw| normalize_whitespace(&raw))
        .ok_or_else(|| ArxivError::Malformed("entry缺少title字段".to_string()))?;

    // 作者列表，保留原始顺序
    let mut authors = Vec::new();
    let mut author_search = 0;
    while let Some(pos) = entry[author_search..].find("<author>") {
        let author_start = author_search + pos;
        let Some(end_pos) = entry[author_start..].find("</author>") else {
            break;
        };
        let author_end = author_start + end_pos + "</author>".len();
        let author_block = &entry[author_start..author_end];
        if let Some(name) = extract_tag_text(author_block, "name") {
            authors.push(normalize_whitespace(&name));
        }
        author_search = author_end;
    }

    let summary = extract_tag_text(entry, "summary")
        .map(|raw| normalize_whitespace(&raw))
        .unwrap_or_default();

    let published_raw = extract_tag_text(entry, "published")
        .ok_or_else(|| ArxivError::Malformed("entry缺少published字段".to_string()))?;
    let published = to_day_precision(&published_raw)?;

    let pdf_url = extract_pdf_url(entry).unwrap_or_else(|| id_url.replace("/abs/", "/pdf/"));

    Ok(PaperRecord {
        title,
        authors,
        published,
        summary,
        pdf_url,
    })
}

/// 从 <link> 标签中提取PDF地址
fn extract_pdf_url(entry: &str) -> Option<String> {
    let mut link_search = 0;
    while let Some(pos) = entry[link_search..].find("<link") {
        let link_start = link_search + pos;
        let end_pos = entry[link_start..]
            .find("/>")
            .or_else(|| entry[link_start..].find('>'))?;
        let link_end = link_start + end_pos + 2;
        let link_tag = &entry[link_start..link_end.min(entry.len())];

        let title_attr = extract_attribute(link_tag, "title").unwrap_or_default();
        let link_type = extract_attribute(link_tag, "type").unwrap_or_default();
        if title_attr == "pdf" || link_type == "application/pdf" {
            return extract_attribute(link_tag, "href");
        }
        link_search = link_end.min(entry.len());
    }
    None
}

/// 将发布时间截断为天级精度（"2017-06-12T17:57:34Z" -> "2017-06-12"）
fn to_day_precision(raw: &str) -> Result<String, ArxivError> {
    let trimmed = raw.trim();
    let day = trimmed
        .get(..10)
        .ok_or_else(|| ArxivError::Malformed(format!("发布时间格式异常: {}", raw)))?;

    chrono::NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map_err(|_| ArxivError::Malformed(format!("发布时间格式异常: {}", raw)))?;

    Ok(day.to_string())
}

/// 提取首个 <tag>text</tag> 的文本内容
fn extract_tag_text(xml: &str, tag: &str) -> Option<String> {
    let open = format!("<{}", tag);
    let close = format!("</{}>", tag);

    let start_pos = xml.find(&open)?;
    let content_start = xml[start_pos..].find('>')? + start_pos + 1;
    let content_end = xml[content_start..].find(&close)? + content_start;

    Some(xml[content_start..content_end].trim().to_string())
}

/// 提取标签字符串中的属性值
fn extract_attribute(tag: &str, attr: &str) -> Option<String> {
    let search = format!("{}=\"", attr);
    let start = tag.find(&search)? + search.len();
    let end = tag[start..].find('"')? + start;
    Some(tag[start..end].to_string())
}

/// 压缩连续空白为单个空格
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
