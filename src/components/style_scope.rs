use std::sync::atomic::{ AtomicUsize, Ordering };

static NEXT_SCOPE: AtomicUsize = AtomicUsize::new(0);

/// One CSS rule written against a component's own markup. `:host` stands
/// for the component root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleRule {
    pub selector: &'static str,
    pub declarations: &'static str,
}

/// Per-instance style boundary. The component root carries
/// `data-scope=<id>` and every rule is rewritten under that selector, so an
/// instance's styles never reach outside its own subtree.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleScope {
    id: String,
}

impl StyleScope {
    pub fn new(prefix: &str) -> Self {
        let n = NEXT_SCOPE.fetch_add(1, Ordering::Relaxed);
        Self { id: format!("{}-{}", prefix, n) }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn selector(&self) -> String {
        format!("[data-scope={}]", self.id)
    }

    pub fn stylesheet(&self, rules: &[StyleRule]) -> String {
        let root = self.selector();
        rules
            .iter()
            .map(|rule| {
                let selector = if rule.selector == ":host" {
                    root.clone()
                } else {
                    format!("{} {}", root, rule.selector)
                };
                format!("{} {{ {} }}", selector, rule.declarations)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
