use std::borrow::Cow;

use crate::domain::FeedResponse;
use crate::mvi::{Intent, RequestEvent};

#[derive(Debug, Clone, PartialEq)]
pub enum FeedIntent {
    /// Lifecycle of the feed request.
    Load(RequestEvent<FeedResponse>),
}

impl Intent for FeedIntent {
    fn action_type(&self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Self::Load(RequestEvent::Pending) => "feed/getFeeds/pending",
            Self::Load(RequestEvent::Fulfilled(_)) => "feed/getFeeds/fulfilled",
            Self::Load(RequestEvent::Rejected { .. }) => "feed/getFeeds/rejected",
        })
    }
}
