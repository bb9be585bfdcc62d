// Social login profile fields

use crate::config::SocialConfig;

/// Facebook profile field requested at login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacebookField {
    Name,
    Gender,
    Birthday,
    Location,
}

impl FacebookField {
    /// Graph API field name
    pub fn as_str(&self) -> &'static str {
        match self {
            FacebookField::Name => "name",
            FacebookField::Gender => "gender",
            FacebookField::Birthday => "birthday",
            FacebookField::Location => "location",
        }
    }
}

/// Fields to request, name and gender first
pub fn requested_fields(config: &SocialConfig) -> Vec<FacebookField> {
    let mut fields = vec![FacebookField::Name, FacebookField::Gender];
    if config.facebook_birthday {
        fields.push(FacebookField::Birthday);
    }
    if config.facebook_location {
        fields.push(FacebookField::Location);
    }
    fields
}

/// Comma separated list for the Graph API `fields` parameter
pub fn fields_query(config: &SocialConfig) -> String {
    requested_fields(config)
        .iter()
        .map(FacebookField::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_requests_everything() {
        let fields = requested_fields(&SocialConfig::default());
        assert_eq!(
            fields,
            vec![
                FacebookField::Name,
                FacebookField::Gender,
                FacebookField::Birthday,
                FacebookField::Location
            ]
        );
    }

    #[test]
    fn test_name_and_gender_always_requested() {
        let config = SocialConfig {
            facebook_birthday: false,
            facebook_location: false,
        };
        assert_eq!(fields_query(&config), "name,gender");
    }

    #[test]
    fn test_fields_query() {
        let config = SocialConfig {
            facebook_birthday: false,
            facebook_location: true,
        };
        assert_eq!(fields_query(&config), "name,gender,location");
    }
}
