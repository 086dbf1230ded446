use crate::document::{Document, DocumentStatus};
use crate::engine::SearchServer;
use crate::error::Result;
use std::collections::VecDeque;

/// Default window: one request per minute for a day
pub const MINUTES_IN_DAY: usize = 1440;

/// Tracks how many of the last `window` search requests found nothing
#[derive(Debug)]
pub struct RequestQueue<'a> {
    search_server: &'a SearchServer,
    timeline: VecDeque<usize>,
    window: usize,
    no_result_requests: usize,
}

impl<'a> RequestQueue<'a> {
    pub fn new(search_server: &'a SearchServer) -> Self {
        Self::with_window(search_server, MINUTES_IN_DAY)
    }

    pub fn with_window(search_server: &'a SearchServer, window: usize) -> Self {
        Self {
            search_server,
            timeline: VecDeque::with_capacity(window.min(MINUTES_IN_DAY)),
            window,
            no_result_requests: 0,
        }
    }

    pub fn add_find_request_by<P>(&mut self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(i32, DocumentStatus, i32) -> bool,
    {
        let result = self.search_server.find_top_documents_by(raw_query, predicate)?;
        self.record(result.len());
        Ok(result)
    }

    pub fn add_find_request_with_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        let result = self
            .search_server
            .find_top_documents_with_status(raw_query, status)?;
        self.record(result.len());
        Ok(result)
    }

    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        let result = self.search_server.find_top_documents(raw_query)?;
        self.record(result.len());
        Ok(result)
    }

    /// Number of requests inside the window that returned no documents
    pub fn no_result_requests(&self) -> usize {
        self.no_result_requests
    }

    fn record(&mut self, result_size: usize) {
        if result_size == 0 {
            self.no_result_requests += 1;
        }
        self.timeline.push_back(result_size);

        while self.timeline.len() > self.window {
            if self.timeline.pop_front() == Some(0) {
                self.no_result_requests -= 1;
            }
        }
    }
}
