//! FIFO frontier of URLs waiting to be crawled
//!
//! Strict first-in first-out order is what makes the crawl breadth-first. The
//! frontier also remembers every URL it has ever accepted, so a page is never
//! queued twice even after it has been crawled.

use crate::CrawlError;
use std::collections::{HashSet, VecDeque};

/// Queue of pending URLs plus the set of every URL ever enqueued
#[derive(Debug, Default)]
pub struct Frontier {
    /// URLs waiting for a visit, oldest first
    pending: VecDeque<String>,

    /// Every URL ever enqueued, crawled or not
    queued: HashSet<String>,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `url` to the back of the queue unless it was seen before
    ///
    /// # Returns
    ///
    /// * `true` - The URL was new and is now pending
    /// * `false` - The URL had already been enqueued at some point
    pub fn enqueue(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        if self.queued.contains(&url) {
            return false;
        }

        self.queued.insert(url.clone());
        self.pending.push_back(url);
        true
    }

    /// Removes and returns the earliest-enqueued pending URL
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The next URL to crawl
    /// * `Err(CrawlError::EmptyFrontier)` - Nothing is pending
    pub fn dequeue(&mut self) -> Result<String, CrawlError> {
        self.pending.pop_front().ok_or(CrawlError::EmptyFrontier)
    }

    /// Number of URLs still pending
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if no URL is pending
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
