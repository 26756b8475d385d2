use std::fmt::{Display, Formatter};

/// Domain filter given either as one value or as an ordered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Domains {
    One(String),
    Many(Vec<String>),
}

impl Domains {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let items: &[String] = match self {
            Self::One(domain) => std::slice::from_ref(domain),
            Self::Many(domains) => domains,
        };
        items.iter().map(String::as_str)
    }

    /// Query value: each domain percent-encoded, joined with `,`.
    pub fn to_query_value(&self) -> String {
        self.iter()
            .map(|domain| urlencoding::encode(domain).into_owned())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Display for Domains {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.iter().collect::<Vec<_>>().join(","))
    }
}

impl From<&str> for Domains {
    fn from(value: &str) -> Self {
        Self::One(value.to_owned())
    }
}

impl From<String> for Domains {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<String>> for Domains {
    fn from(value: Vec<String>) -> Self {
        Self::Many(value)
    }
}

impl From<Vec<&str>> for Domains {
    fn from(value: Vec<&str>) -> Self {
        Self::Many(value.into_iter().map(str::to_owned).collect())
    }
}
