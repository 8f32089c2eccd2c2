//! Traversal order.

use core::fmt;
use core::str::FromStr;

/// Order in which nodes are visited.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Depth-first pre-order: a node is visited before its descendants.
    #[default]
    Pre,
    /// Depth-first post-order: a node is visited after its descendants.
    Post,
    /// Breadth-first: all nodes at depth `d` are visited before any node at
    /// depth `d + 1`.
    BreadthFirst,
}

impl Order {
    /// Returns the short name of the order.
    ///
    /// The name can be parsed back with [`str::parse`].
    ///
    /// # Examples
    ///
    /// ```
    /// use treecrawl::Order;
    ///
    /// assert_eq!(Order::BreadthFirst.as_str(), "bfs");
    /// assert_eq!("bfs".parse::<Order>(), Ok(Order::BreadthFirst));
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pre => "pre",
            Self::Post => "post",
            Self::BreadthFirst => "bfs",
        }
    }

    /// Returns true if the order honors [`Context::skip`][`crate::Context::skip`].
    #[inline]
    #[must_use]
    pub fn honors_skip(self) -> bool {
        self == Self::Pre
    }

    /// Returns true if the order honors [`Context::replace`][`crate::Context::replace`].
    #[inline]
    #[must_use]
    pub fn honors_replace(self) -> bool {
        self != Self::Post
    }
}

impl fmt::Display for Order {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = ParseOrderError;

    /// Parses an order name.
    ///
    /// Accepts `pre`, `post`, and `bfs`, and the long forms `pre-order`,
    /// `post-order`, and `breadth-first`. Case and surrounding whitespaces are
    /// ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let order = if name.eq_ignore_ascii_case("pre") || name.eq_ignore_ascii_case("pre-order") {
            Self::Pre
        } else if name.eq_ignore_ascii_case("post") || name.eq_ignore_ascii_case("post-order") {
            Self::Post
        } else if name.eq_ignore_ascii_case("bfs") || name.eq_ignore_ascii_case("breadth-first") {
            Self::BreadthFirst
        } else {
            return Err(ParseOrderError { _priv: () });
        };
        Ok(order)
    }
}

/// Error returned when parsing an unknown [`Order`] name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown traversal order (expected `pre`, `post`, or `bfs`)")]
pub struct ParseOrderError {
    /// Prevents construction outside of the crate.
    _priv: (),
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::string::ToString;

    use rstest::rstest;

    #[rstest]
    #[case::short_pre("pre", Order::Pre)]
    #[case::short_post("post", Order::Post)]
    #[case::short_bfs("bfs", Order::BreadthFirst)]
    #[case::long_pre("pre-order", Order::Pre)]
    #[case::long_post("post-order", Order::Post)]
    #[case::long_bfs("breadth-first", Order::BreadthFirst)]
    #[case::uppercase("BFS", Order::BreadthFirst)]
    #[case::padded("  post\n", Order::Post)]
    fn parse_known(#[case] input: &str, #[case] expected: Order) {
        assert_eq!(input.parse::<Order>(), Ok(expected));
    }

    #[rstest]
    #[case::empty("")]
    #[case::typo("psot")]
    #[case::level_order("level")]
    #[case::inner_space("pre order")]
    fn parse_unknown(#[case] input: &str) {
        let err = input.parse::<Order>().expect_err("should fail: unknown order name");
        assert!(err.to_string().starts_with("unknown traversal order"));
    }

    #[test]
    fn display_round_trips() {
        for order in [Order::Pre, Order::Post, Order::BreadthFirst] {
            assert_eq!(order.to_string().parse::<Order>(), Ok(order));
        }
    }

    #[test]
    fn default_is_pre_order() {
        assert_eq!(Order::default(), Order::Pre);
    }
}
