/// Time range anchors pulled out of a transpiled fragment, plus the filter
/// stages that remain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeBounds {
    pub start: String,
    pub stop: String,
    pub filters: String,
}

const START_ANCHOR: &str = "start@";
const STOP_ANCHOR: &str = "stop@";

impl RangeBounds {
    /// Splits `fragment` on `&&`. Parts of the form `start@<time>` or
    /// `stop@<time>` override the defaults and are dropped; every other part
    /// is kept in order.
    ///
    /// The split is textual: a string value containing `&&` is split as
    /// well and its halves are glued back together without the separator.
    pub fn split(fragment: &str, default_start: &str, default_stop: &str) -> Self {
        let mut bounds = RangeBounds {
            start: default_start.to_string(),
            stop: default_stop.to_string(),
            filters: String::new(),
        };

        for part in fragment.split("&&") {
            if part.starts_with(START_ANCHOR) {
                bounds.start = anchor_value(part);
            } else if part.starts_with(STOP_ANCHOR) {
                bounds.stop = anchor_value(part);
            } else {
                bounds.filters.push_str(part);
            }
        }

        bounds
    }
}

fn anchor_value(part: &str) -> String {
    part.split_once('@')
        .map(|(_, value)| value.to_string())
        .unwrap_or_default()
}
