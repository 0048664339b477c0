use sweatdrop_engine::paint::GradientId;

/// Gradient ids owned by one drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropGradientIds {
    pub shadow: GradientId,
    pub body: GradientId,
}

/// Per-run monotonic gradient id allocator.
///
/// Ids look like `shadowGradient_1` / `dropGradient_1`, or
/// `{namespace}-shadowGradient_1` when a namespace is set. Two runs writing
/// into one document need distinct namespaces.
#[derive(Debug, Clone, Default)]
pub struct GradientIds {
    namespace: Option<String>,
    next: u64,
}

impl GradientIds {
    pub fn new(namespace: Option<&str>) -> Self {
        Self { namespace: namespace.map(str::to_owned), next: 1 }
    }

    /// Allocates the shadow and body ids for the next drop.
    pub fn next_pair(&mut self) -> DropGradientIds {
        let n = self.next;
        self.next += 1;
        DropGradientIds {
            shadow: self.make("shadowGradient", n),
            body: self.make("dropGradient", n),
        }
    }

    fn make(&self, kind: &str, n: u64) -> GradientId {
        match &self.namespace {
            Some(ns) => GradientId::new(format!("{ns}-{kind}_{n}")),
            None => GradientId::new(format!("{kind}_{n}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_are_sequential_from_one() {
        let mut ids = GradientIds::new(None);
        let a = ids.next_pair();
        let b = ids.next_pair();
        assert_eq!(a.shadow.as_str(), "shadowGradient_1");
        assert_eq!(a.body.as_str(), "dropGradient_1");
        assert_eq!(b.shadow.as_str(), "shadowGradient_2");
    }

    #[test]
    fn namespace_prefixes_ids() {
        let mut ids = GradientIds::new(Some("left"));
        assert_eq!(ids.next_pair().body.as_str(), "left-dropGradient_1");
    }

    #[test]
    fn ids_never_repeat_within_a_run() {
        let mut ids = GradientIds::new(None);
        let mut seen = HashSet::new();
        // Far beyond the 1000..=9999 range a random suffix would draw from.
        for _ in 0..20_000 {
            let pair = ids.next_pair();
            assert!(seen.insert(pair.shadow));
            assert!(seen.insert(pair.body));
        }
    }
}
