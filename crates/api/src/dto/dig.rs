use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct DigParams {
    /// Domain to look up; anything unusable yields an empty result.
    #[serde(default)]
    pub name: Option<String>,
}

impl DigParams {
    pub fn trimmed_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
