//! Parameter schemas for the Clay tools.
//!
//! Each struct is both the validator and the wire format of one tool: arguments
//! are deserialized into it (filling defaults and dropping unknown fields) and
//! the struct is serialized back as the outbound body. Field order and names
//! match the backend's; descriptions are read by the calling agent. Key order in
//! the forwarded body is not significant.
//!
//! Optional fields may be omitted but never `null`: a null is rejected rather
//! than treated as absent, and the schema advertises the plain type.
//!
//! Numeric fields use [`serde_json::Number`] so integers and floats are forwarded
//! exactly as the caller wrote them.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

fn default_limit() -> Number {
    Number::from(10)
}

/// Deserialize an optional field that, when present, must hold a value.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Parameters for `searchContacts` and `searchInteractions`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct ContactSearchParams {
    #[serde(default)]
    #[schemars(
        description = "If the query refers to a job title, position, or industry, list relevant job titles as they would be on a LinkedIn profile. Examples: Developer should return positions such as 'Software Engineer', 'Full Stack Developer', 'Data Scientist', etc. Banker should return positions such as 'Financial Analyst', 'Investment Banker', 'Credit Analyst', etc. Healthcare industry should return positions such as 'Registered Nurse', 'Physician', 'Medical Director', etc. Legal industry should return positions such as 'Attorney', 'Legal Counsel', 'Paralegal', etc."
    )]
    pub job_title: Vec<String>,

    #[serde(default)]
    #[schemars(
        description = "If the query refers to a company or acronym of companies, list company names as they would on a LinkedIn profile."
    )]
    pub company_name: Vec<String>,

    #[serde(default)]
    #[schemars(
        description = "If the query refers to a location (city, state, country, region) where people are located or based, list the locations as they would appear on a LinkedIn profile. For example, if someone asks about \"people in New York\", return \"New York City Metropolitan Area\" or if they ask about \"contacts in California\", return \"San Francisco Bay Area\", \"Greater Los Angeles Area\", etc."
    )]
    pub location: Vec<String>,

    #[schemars(
        description = "The raw search query from the user. Must preserve exact intent and details to enable accurate searching, including: relationship qualifiers, interaction metrics, relationship strength, names, companies, locations, dates (specific dates, date ranges, or relative dates like \"last week\" are required if mentioned by user), job titles, skills, and logical conditions (OR/AND)."
    )]
    pub query: String,

    #[serde(default)]
    #[schemars(
        description = "Extract and list specific keywords related to professional expertise, skills, interests, or hobbies that the user is searching for. For example, if someone asks for 'people who know about machine learning or play tennis', the keywords would be ['machine learning', 'tennis']. Do not include job titles or company names here as those have dedicated fields. Focus on capturing domain expertise, technical skills, personal interests, and hobby-related terms that help identify relevant contacts."
    )]
    pub keywords: Vec<String>,

    #[serde(default = "default_limit")]
    #[schemars(
        with = "f64",
        description = "The number of contacts to return if the user asks for an amount."
    )]
    pub limit: Number,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(
        with = "Vec<f64>",
        description = "Used to exclude previously returned contact IDs when the user asks for more results (e.g. \"who else\" or \"show me more\"). You should pass all contact IDs from previous searchContacts responses to ensure new results are shown."
    )]
    pub exclude_contact_ids: Option<Vec<Number>>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(
        with = "String",
        description = "How would you like the results sorted? For example: \"most recent contacts\" will sort by last interaction date, \"closest connections\" will sort by interaction count, and \"alphabetical\" will sort by name. If no sort preference is given, this can be left empty."
    )]
    pub sort_instructions: Option<String>,
}

/// Parameters for `aggregateContacts`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct AggregateParams {
    #[serde(default)]
    #[schemars(
        description = "If the query refers to a job title, position, or industry, list relevant job titles as they would be on a LinkedIn profile. Examples: Developer should return positions such as 'Software Engineer', 'Full Stack Developer', 'Data Scientist', etc. Banker should return positions such as 'Financial Analyst', 'Investment Banker', 'Credit Analyst', etc. Healthcare industry should return positions such as 'Registered Nurse', 'Physician', 'Medical Director', etc. Legal industry should return positions such as 'Attorney', 'Legal Counsel', 'Paralegal', etc."
    )]
    pub job_title: Vec<String>,

    #[serde(default)]
    #[schemars(
        description = "If the query refers to a company or acronym of companies, list company names as they would on a LinkedIn profile."
    )]
    pub company_name: Vec<String>,

    #[serde(default)]
    #[schemars(
        description = "If the query refers to a location (city, state, country, region) where people are located or based, list the locations as they would appear on a LinkedIn profile. For example, if someone asks about \"people in New York\", return \"New York City Metropolitan Area\" or if they ask about \"contacts in California\", return \"San Francisco Bay Area\", \"Greater Los Angeles Area\", etc."
    )]
    pub location: Vec<String>,

    #[schemars(
        description = "The raw search query from the user. This field is required and should contain all the key details extracted from the user's prompt to enable effective database searching and aggregation. For example, if the user asks 'how many people work at Google', preserve both the company filter 'Google' and the fact that they want a count. If they ask 'what are the most common job titles in my network', preserve that they want job titles aggregated and ranked by frequency. The query should maintain any conditions (OR, AND) and aggregation needs to properly build the elasticsearch query."
    )]
    pub query: String,
}

/// Parameters for `getContact`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct GetContactParams {
    #[schemars(with = "f64", description = "The ID of the contact to get details for.")]
    pub contact_id: Number,
}

/// Parameters for `createContact`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct CreateContactParams {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "String", description = "The first name of the contact.")]
    pub first_name: Option<String>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "String", description = "The last name of the contact.")]
    pub last_name: Option<String>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(
        with = "Vec<String>",
        description = "The phone number of the contact."
    )]
    pub phone: Option<Vec<String>>,

    #[serde(default)]
    #[schemars(description = "The email of the contact.")]
    pub email: Vec<String>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "String", description = "The LinkedIn handle of the contact.")]
    pub linkedin: Option<String>,

    #[serde(default)]
    #[schemars(description = "The website of the contact.")]
    pub website: Vec<String>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "String", description = "The job title of the contact.")]
    pub title: Option<String>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "String", description = "The organization of the contact.")]
    pub organization: Option<String>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(
        with = "String",
        description = "The birthday of the contact. Use the format YYYY-MM-DD, if no year is specified use 0, month and day are required."
    )]
    pub birthday: Option<String>,
}

/// Parameters for `createNote`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct CreateNoteParams {
    #[schemars(with = "f64", description = "The ID of the contact to add the note to.")]
    pub contact_id: Number,

    #[schemars(description = "The content of the note.")]
    pub content: String,
}

/// Parameters for `getGroups`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct GetGroupsParams {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(
        with = "f64",
        description = "The maximum number of groups to return."
    )]
    pub limit: Option<Number>,
}

/// Parameters for `createGroup`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct CreateGroupParams {
    #[schemars(description = "The name of the group to create.")]
    pub title: String,
}

/// Parameters for `updateGroup`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct UpdateGroupParams {
    #[schemars(with = "f64", description = "The ID of the group or list to update.")]
    pub group_id: Number,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(
        with = "String",
        description = "The new name of the group if the user wants to rename it."
    )]
    pub title: Option<String>,

    #[serde(default)]
    #[schemars(
        with = "Vec<f64>",
        description = "A list of contact IDs that should be added to this group. Each ID should be a number representing an existing contact in your network. You can provide multiple IDs to add several contacts at once."
    )]
    pub add_contact_ids: Vec<Number>,

    #[serde(default)]
    #[schemars(
        with = "Vec<f64>",
        description = "A list of contact IDs that should be removed from this group. Each ID should be a number representing an existing contact in your network. You can provide multiple IDs to remove several contacts at once."
    )]
    pub remove_contact_ids: Vec<Number>,
}

/// Parameters for `getNotes` and `getEvents`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct DateRangeParams {
    #[schemars(
        description = "Use Date Math with now +/- time intervals. Supported units: d (days), w (weeks), M (months), y (years), h (hours), m (minutes), s (seconds). Examples: now-1d (yesterday), now+2w (2 weeks ahead), now/M (start of month), now+1M/M (start of next month)."
    )]
    pub start: String,

    #[schemars(
        description = "Use Date Math with now +/- time intervals. Supported units: d (days), w (weeks), M (months), y (years), h (hours), m (minutes), s (seconds). Examples: now-1d (yesterday), now+2w (2 weeks ahead), now/M (start of month), now+1M/M (start of next month)."
    )]
    pub end: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_defaults_are_filled() {
        let params: ContactSearchParams =
            serde_json::from_value(json!({"query": "engineers in SF"})).unwrap();

        assert_eq!(params.limit, Number::from(10));
        assert!(params.job_title.is_empty());
        assert!(params.exclude_contact_ids.is_none());

        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(
            body,
            json!({
                "job_title": [],
                "company_name": [],
                "location": [],
                "query": "engineers in SF",
                "keywords": [],
                "limit": 10
            })
        );
    }

    #[test]
    fn test_numbers_keep_their_representation() {
        let params: GetGroupsParams = serde_json::from_value(json!({"limit": 2.5})).unwrap();
        assert_eq!(serde_json::to_value(&params).unwrap(), json!({"limit": 2.5}));

        let params: GetContactParams = serde_json::from_value(json!({"contact_id": 42})).unwrap();
        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"contact_id":42}"#
        );
    }

    #[test]
    fn test_create_contact_omits_absent_optionals() {
        let params: CreateContactParams =
            serde_json::from_value(json!({"first_name": "Ada", "phone": ["+44 20 7946 0000"]}))
                .unwrap();

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "first_name": "Ada",
                "phone": ["+44 20 7946 0000"],
                "email": [],
                "website": []
            })
        );
    }

    #[test]
    fn test_string_is_not_a_number() {
        let result: Result<CreateNoteParams, _> =
            serde_json::from_value(json!({"contact_id": "42", "content": "hi"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_null_optionals_are_rejected() {
        let result: Result<GetGroupsParams, _> = serde_json::from_value(json!({"limit": null}));
        assert!(result.is_err());

        let result: Result<CreateContactParams, _> =
            serde_json::from_value(json!({"first_name": null, "phone": null}));
        assert!(result.is_err());

        let result: Result<ContactSearchParams, _> = serde_json::from_value(
            json!({"query": "founders", "exclude_contact_ids": null}),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_optional_fields_advertise_plain_types() {
        let schema = serde_json::to_value(schemars::schema_for!(CreateContactParams)).unwrap();
        let properties = &schema["properties"];

        for field in ["first_name", "last_name", "linkedin", "title", "organization", "birthday"] {
            assert_eq!(properties[field]["type"], json!("string"), "{}", field);
        }
        assert_eq!(properties["phone"]["type"], json!("array"));
        assert!(schema
            .get("required")
            .map_or(true, |required| required == &json!([])));

        let schema = serde_json::to_value(schemars::schema_for!(GetGroupsParams)).unwrap();
        assert_eq!(schema["properties"]["limit"]["type"], json!("number"));

        let schema = serde_json::to_value(schemars::schema_for!(UpdateGroupParams)).unwrap();
        assert_eq!(schema["properties"]["title"]["type"], json!("string"));
        assert_eq!(schema["required"], json!(["group_id"]));
    }
}
