use serde::Serialize;
use tabled::{Table, Tabled};

use crate::api::TodoResponse as Todo;
use crate::cli::api_client::ApiClient;
use crate::cli::error::CliResult;
use crate::cli::utils::{apply_table_style, format_completed, truncate_with_ellipsis};
use crate::db::TodoId;

#[derive(Debug, Serialize)]
pub(crate) struct CreateTodoRequest {
    pub(crate) content: String,
}

#[derive(Debug, Default, Serialize)]
pub(crate) struct UpdateTodoRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) completed: Option<bool>,
}

#[derive(Tabled)]
pub(crate) struct TodoDisplay {
    #[tabled(rename = "ID")]
    pub(crate) id: TodoId,
    #[tabled(rename = "Done")]
    pub(crate) done: &'static str,
    #[tabled(rename = "Content")]
    pub(crate) content: String,
}

impl From<&Todo> for TodoDisplay {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.todo_id,
            done: format_completed(todo.completed),
            content: truncate_with_ellipsis(&todo.content, 60),
        }
    }
}

pub(crate) fn format_table(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return "No todos found.".to_string();
    }

    let display: Vec<TodoDisplay> = todos.iter().map(|t| t.into()).collect();
    let mut table = Table::new(display);
    apply_table_style(&mut table);
    table.to_string()
}

/// List all todos
pub async fn list_todos(api_client: &ApiClient, format: &str) -> CliResult<String> {
    let response = api_client.get("/todos").send().await?;
    let todos: Vec<Todo> = ApiClient::handle_response(response).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&todos)?),
        _ => Ok(format_table(&todos)),
    }
}

/// Get a single todo by ID
pub async fn get_todo(api_client: &ApiClient, id: TodoId, format: &str) -> CliResult<String> {
    let response = api_client.get(&format!("/todos/{}", id)).send().await?;
    let todo: Todo = ApiClient::handle_response(response).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&todo)?),
        _ => {
            use tabled::builder::Builder;

            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            builder.push_record(["ID", &todo.todo_id.to_string()]);
            builder.push_record(["Content", &todo.content]);
            builder.push_record(["Completed", if todo.completed { "yes" } else { "no" }]);

            let mut table = builder.build();
            apply_table_style(&mut table);
            Ok(table.to_string())
        }
    }
}

/// Create a new todo
pub async fn create_todo(api_client: &ApiClient, content: &str) -> CliResult<String> {
    let request_body = CreateTodoRequest {
        content: content.to_string(),
    };

    let response = api_client.post("/todos").json(&request_body).send().await?;

    let todo: Todo = ApiClient::handle_response(response).await?;
    Ok(format!("✓ Created todo: {} ({})", todo.content, todo.todo_id))
}

/// Update a todo; fields left as None are not sent
pub async fn update_todo(
    api_client: &ApiClient,
    id: TodoId,
    content: Option<&str>,
    completed: Option<bool>,
) -> CliResult<String> {
    let request_body = UpdateTodoRequest {
        content: content.map(|s| s.to_string()),
        completed,
    };

    let response = api_client
        .put(&format!("/todos/{}", id))
        .json(&request_body)
        .send()
        .await?;

    let todo: Todo = ApiClient::handle_response(response).await?;
    Ok(format!("✓ Updated todo: {} ({})", todo.content, todo.todo_id))
}

/// Mark a todo as done
pub async fn complete_todo(api_client: &ApiClient, id: TodoId) -> CliResult<String> {
    update_todo(api_client, id, None, Some(true)).await?;
    Ok(format!("✓ Todo {} marked as done", id))
}

/// Delete a todo
pub async fn delete_todo(api_client: &ApiClient, id: TodoId) -> CliResult<String> {
    let response = api_client.delete(&format!("/todos/{}", id)).send().await?;

    ApiClient::handle_empty_response(response).await?;
    Ok(format!("✓ Deleted todo {}", id))
}
