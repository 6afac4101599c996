use std::fmt::Display;

/// Hierarchical statement address such as `1.2.1.`.
///
/// The number of segments is the nesting depth. Addresses are values: moving
/// to a sibling or a child returns a new address and leaves this one alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address(Vec<u32>);

impl Address {
    pub fn new(segments: Vec<u32>) -> Self {
        Address(segments)
    }

    /// The first address one level below this one.
    pub fn child(&self) -> Address {
        let mut segments = self.0.clone();
        segments.push(1);
        Address(segments)
    }

    /// The address right after this one, at the same depth.
    pub fn next_sibling(&self) -> Address {
        let mut segments = self.0.clone();
        if let Some(last) = segments.last_mut() {
            *last += 1;
        }
        Address(segments)
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// One tab per level below the top.
    pub fn indentation(&self) -> String {
        "\t".repeat(self.depth().saturating_sub(1))
    }

    /// Formats one output line: indentation, marker, address, then `content`.
    pub fn line(&self, marker: char, content: &str) -> String {
        format!("{}{}{} {}\n", self.indentation(), marker, self, content)
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for segment in self.0.iter() {
            write!(f, "{}.", segment)?;
        }
        Ok(())
    }
}
