use crate::models::RequestParameter;

/// Read access to the named parameters of an inbound request
pub trait RequestSource {
    /// Raw value of the first parameter called `name`, if any
    fn parameter(&self, name: &str) -> Option<String>;

    fn request_parameter(&self, name: &str) -> RequestParameter {
        RequestParameter::new(self.parameter(name))
    }
}

/// Ordered pairs, first occurrence wins
impl RequestSource for [(String, String)] {
    fn parameter(&self, name: &str) -> Option<String> {
        self.iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }
}

impl RequestSource for Vec<(String, String)> {
    fn parameter(&self, name: &str) -> Option<String> {
        self.as_slice().parameter(name)
    }
}
