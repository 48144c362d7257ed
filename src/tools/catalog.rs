//! The Clay tool catalog.
//!
//! Descriptions are read by the calling agent to choose between overlapping
//! tools (search returns records, aggregate returns only numbers, getNotes and
//! getEvents only retrieve by date range). Keep their wording exact.

use crate::tools::params::{
    AggregateParams, ContactSearchParams, CreateContactParams, CreateGroupParams,
    CreateNoteParams, DateRangeParams, GetContactParams, GetGroupsParams, UpdateGroupParams,
};
use crate::tools::registry::ToolDefinition;

pub const SEARCH_CONTACTS: &str = "searchContacts";
pub const SEARCH_INTERACTIONS: &str = "searchInteractions";
pub const AGGREGATE_CONTACTS: &str = "aggregateContacts";
pub const GET_CONTACT: &str = "getContact";
pub const CREATE_CONTACT: &str = "createContact";
pub const CREATE_NOTE: &str = "createNote";
pub const GET_GROUPS: &str = "getGroups";
pub const CREATE_GROUP: &str = "createGroup";
pub const UPDATE_GROUP: &str = "updateGroup";
pub const GET_NOTES: &str = "getNotes";
pub const GET_EVENTS: &str = "getEvents";

const SEARCH_CONTACTS_DESCRIPTION: &str = "Search for contacts and return matching people. Use for questions about specific contacts or \"who\" questions (e.g. \"Who did I meet most?\" or \"who works as an engineer?\"). Returns actual contact records for queries needing specific people.";

const SEARCH_INTERACTIONS_DESCRIPTION: &str = "Search for interactions and return matching interactions. Use for questions about specific interactions, \"who\" questions (e.g. \"Who did I meet most?\"), finding best friends based on relevance score, or finding recently added/created contacts. Returns actual contact records for queries needing specific interactions.";

const AGGREGATE_CONTACTS_DESCRIPTION: &str = "Get numerical statistics and counts ONLY. Returns numbers and percentages, never specific contacts. For counting questions like \"how many work at Google?\" or \"what % are engineers?\". Use search endpoint instead for any \"who\" questions or to get actual contact details.";

const GET_CONTACT_DESCRIPTION: &str =
    "Get details for a contact by id, including emails, social links, phone numbers, and notes.";

const CREATE_CONTACT_DESCRIPTION: &str = "Create a new contact record in Clay. This endpoint should only be used when you need to create a completely new contact, not for adding contacts to groups.";

const CREATE_NOTE_DESCRIPTION: &str = "Create a note for a contact. Only use this when the user explicitly asks to create, add, or save a note.";

const GET_GROUPS_DESCRIPTION: &str = "Get all groups or lists for the user.";

const CREATE_GROUP_DESCRIPTION: &str = "Create a group or list for the user. If a group with the same name already exists, it will not create a duplicate unless explicitly requested to ignore the check.";

const UPDATE_GROUP_DESCRIPTION: &str = "Update a group or list. Use this to update the group title and/or modify its members. When adding or removing contacts, provide ALL contact IDs to add/remove in a single call - do not make multiple calls for individual contacts.";

const GET_NOTES_DESCRIPTION: &str = "Use ONLY when the user explicitly mentions \"note\" or \"notes\" to retrieve notes between two dates (e.g. \"what notes from last week?\"). Returns notes by creation date only - does NOT search note content or filter by other criteria. NEVER use this tool for finding contacts or any other purpose besides retrieving notes. This tool is strictly prohibited from being used unless \"note\" or \"notes\" are explicitly mentioned in the query.";

const GET_EVENTS_DESCRIPTION: &str = "Use this tool ONLY to fetch meetings/events in a date range (e.g. \"what meetings next week?\", \"show calendar for tomorrow\"). DO NOT use for counting meetings, analyzing patterns, or finding frequent participants.";

/// All Clay tools in the order they are advertised.
pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new::<ContactSearchParams>(
            SEARCH_CONTACTS,
            SEARCH_CONTACTS_DESCRIPTION,
            "/search",
            true,
        ),
        ToolDefinition::new::<ContactSearchParams>(
            SEARCH_INTERACTIONS,
            SEARCH_INTERACTIONS_DESCRIPTION,
            "/search-interactions",
            true,
        ),
        ToolDefinition::new::<AggregateParams>(
            AGGREGATE_CONTACTS,
            AGGREGATE_CONTACTS_DESCRIPTION,
            "/aggregate",
            false,
        ),
        ToolDefinition::new::<GetContactParams>(
            GET_CONTACT,
            GET_CONTACT_DESCRIPTION,
            "/get-contact",
            true,
        ),
        ToolDefinition::new::<CreateContactParams>(
            CREATE_CONTACT,
            CREATE_CONTACT_DESCRIPTION,
            "/create-contact",
            true,
        ),
        ToolDefinition::new::<CreateNoteParams>(CREATE_NOTE, CREATE_NOTE_DESCRIPTION, "/note", true),
        ToolDefinition::new::<GetGroupsParams>(
            GET_GROUPS,
            GET_GROUPS_DESCRIPTION,
            "/get-groups",
            false,
        ),
        ToolDefinition::new::<CreateGroupParams>(
            CREATE_GROUP,
            CREATE_GROUP_DESCRIPTION,
            "/create-group",
            false,
        ),
        ToolDefinition::new::<UpdateGroupParams>(
            UPDATE_GROUP,
            UPDATE_GROUP_DESCRIPTION,
            "/update-group",
            false,
        ),
        ToolDefinition::new::<DateRangeParams>(
            GET_NOTES,
            GET_NOTES_DESCRIPTION,
            "/moments/notes",
            true,
        ),
        ToolDefinition::new::<DateRangeParams>(
            GET_EVENTS,
            GET_EVENTS_DESCRIPTION,
            "/moments/events",
            true,
        ),
    ]
}
