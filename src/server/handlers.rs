//! MCP tool handlers for the contact book server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.
//! Each tool stands in for one control of the contact form or table.

use crate::error::StoreError;
use crate::models::ContactField;
use crate::services::{ContactService, DraftUpdate};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes the contact book as tools.
#[derive(Clone)]
pub struct ContactBookServer {
    contact_service: Arc<dyn ContactService>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for ContactBookServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contact-book".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Local contact book - add, edit, delete, search and sort contacts (name, phone, email). Rows are addressed by their index in the current view.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct SearchTermParams {
    /// Text to look for in names, phones and emails; empty shows everything
    term: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SortParams {
    /// Column to sort by: name, phone or email
    column: ContactField,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct UpdateDraftParams {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct AddContactParams {
    name: String,
    phone: String,
    email: String,
}

impl AddContactParams {
    /// Field lengths only; the values are the user's contact data.
    fn log_summary(&self) -> String {
        format!(
            "name_len={}, phone_len={}, email_len={}",
            self.name.len(),
            self.phone.len(),
            self.email.len()
        )
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct RowIndexParams {
    /// Row index as shown by list_contacts
    index: usize,
}

// Convert store errors to MCP errors; form rejections are the caller's to fix
fn to_mcp_error(e: StoreError) -> McpError {
    let code = match &e {
        StoreError::Validation(_)
        | StoreError::NoSuchContact { .. }
        | StoreError::EditInProgress => ErrorCode::INVALID_PARAMS,
        _ => {
            tracing::error!("Contact store failure: {}", e);
            ErrorCode::INTERNAL_ERROR
        }
    };

    McpError {
        code,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn to_json_result(value: &impl Serialize) -> Result<CallToolResult, McpError> {
    let json_response = serde_json::to_string_pretty(value).map_err(|e| McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_response)]))
}

// Tool router implementation
#[tool_router]
impl ContactBookServer {
    /// Create a new contact book server.
    pub fn new(contact_service: Arc<dyn ContactService>) -> Self {
        Self {
            contact_service,
            tool_router: Self::tool_router(),
        }
    }

    /// Show the contact table.
    #[tool(
        description = "List contacts as currently displayed (filtered by the search term and sorted by the active column). Each row carries the index used by begin_edit and delete_contact."
    )]
    async fn list_contacts(&self) -> Result<CallToolResult, McpError> {
        let view = self.contact_service.list_contacts().await;
        to_json_result(&view)
    }

    /// Filter the table.
    #[tool(
        description = "Set the search term. Contacts whose name or email contains it (case-insensitive) or whose phone contains it are shown."
    )]
    async fn set_search_term(
        &self,
        params: Parameters<SearchTermParams>,
    ) -> Result<CallToolResult, McpError> {
        let view = self.contact_service.set_search_term(params.0.term).await;
        to_json_result(&view)
    }

    /// Click a column header.
    #[tool(
        description = "Sort by a column (name, phone or email). Choosing the active column again flips between ascending and descending."
    )]
    async fn sort_contacts(
        &self,
        params: Parameters<SortParams>,
    ) -> Result<CallToolResult, McpError> {
        let view = self.contact_service.sort_by(params.0.column).await;
        to_json_result(&view)
    }

    /// Type into the contact form.
    #[tool(
        description = "Update fields of the contact form. Phone and email are validated as they change; the response lists any inline errors."
    )]
    async fn update_draft(
        &self,
        params: Parameters<UpdateDraftParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let snapshot = self
            .contact_service
            .update_draft(DraftUpdate {
                name: params.name,
                phone: params.phone,
                email: params.email,
            })
            .await;
        to_json_result(&snapshot)
    }

    /// Press the form's submit button.
    #[tool(
        description = "Submit the contact form: adds a new contact, or saves the contact being edited. Fails if a field is empty or invalid."
    )]
    async fn submit_contact(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: submit_contact called");

        let view = self.contact_service.submit().await.map_err(to_mcp_error)?;
        to_json_result(&view)
    }

    /// Fill the form and submit it.
    #[tool(
        description = "Add a new contact in one step. Phone must be digits only and email must look like local@domain.tld."
    )]
    async fn add_contact(
        &self,
        params: Parameters<AddContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        tracing::debug!("Parameters: {}", params.log_summary());

        let view = self
            .contact_service
            .add_contact(params.name, params.phone, params.email)
            .await
            .map_err(to_mcp_error)?;
        to_json_result(&view)
    }

    /// Click a row's edit button.
    #[tool(
        description = "Load the contact on the given row into the form for editing. Call update_draft then submit_contact to save changes."
    )]
    async fn begin_edit(
        &self,
        params: Parameters<RowIndexParams>,
    ) -> Result<CallToolResult, McpError> {
        let snapshot = self
            .contact_service
            .begin_edit(params.0.index)
            .await
            .map_err(to_mcp_error)?;
        to_json_result(&snapshot)
    }

    /// Click a row's delete button.
    #[tool(description = "Delete the contact on the given row. There is no confirmation and no undo.")]
    async fn delete_contact(
        &self,
        params: Parameters<RowIndexParams>,
    ) -> Result<CallToolResult, McpError> {
        let index = params.0.index;
        tracing::info!("MCP Handler: delete_contact called for row {}", index);

        let (removed, view) = self
            .contact_service
            .delete_contact(index)
            .await
            .map_err(to_mcp_error)?;

        to_json_result(&serde_json::json!({
            "deleted": removed,
            "view": view,
        }))
    }

    /// Show the contact form.
    #[tool(description = "Show the contact form: field values, inline errors, and whether it adds or edits.")]
    async fn get_draft(&self) -> Result<CallToolResult, McpError> {
        let snapshot = self.contact_service.draft().await;
        to_json_result(&snapshot)
    }
}
