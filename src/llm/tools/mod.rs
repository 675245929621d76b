pub mod arxiv_search;
