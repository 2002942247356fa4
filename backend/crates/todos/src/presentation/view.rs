//! HTML Views
//!
//! Pages and fragments are rendered with `format!`. Every piece of user
//! data goes through [`escape_html`] before it reaches markup.

use crate::domain::entity::todo::TodoList;
use crate::presentation::directive::{
    DESCRIPTION_ERROR_TARGET, PASSWORD_ERROR_TARGET, USERNAME_ERROR_TARGET,
};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4";

/// Element the list fragment is swapped into
pub const TODO_CONTAINER_ID: &str = "todo-container";

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Empties every error region before a new submission
const CLEAR_ERRORS_JS: &str =
    "document.querySelectorAll('.error').forEach(e => e.textContent = '')";

/// Resets the form only when the list itself was swapped, not an error fragment
const RESET_ON_SUCCESS_JS: &str =
    "if(event.detail.successful && !event.detail.xhr.getResponseHeader('HX-Retarget')) this.reset()";

/// `#id` selector to bare id
fn id_of(selector: &str) -> &str {
    selector.trim_start_matches('#')
}

fn base_style() -> &'static str {
    r#"body{font-family:system-ui,sans-serif;max-width:36rem;margin:2rem auto;padding:0 1rem}
form{margin:1rem 0}
input[type=text],input[type=password]{padding:.4rem;margin:.2rem 0}
.error{color:#b00020;min-height:1.2em}
ul.todos{list-style:none;padding:0}
ul.todos li{padding:.3rem 0}
li.done span{text-decoration:line-through;color:#777}"#
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en"><head>
<meta charset="utf-8"><meta name="viewport" content="width=device-width,initial-scale=1">
<title>{title}</title>
<script src="{HTMX_SRC}"></script>
<style>{style}</style>
</head><body>
{body}
</body></html>"#,
        title = escape_html(title),
        style = base_style(),
    )
}

/// Home page for a signed-in account
pub fn render_index(username: &str, todos: &TodoList) -> String {
    let body = format!(
        r##"<header>
  <p>Signed in as <strong>{username}</strong></p>
  <button hx-post="/sign-out" hx-swap="none">Sign out</button>
</header>
<form hx-post="/create_todo" hx-target="#{TODO_CONTAINER_ID}" hx-swap="innerHTML"
      hx-on::before-request="{clear_errors}"
      hx-on::after-request="{reset_on_success}">
  <input type="text" name="description" placeholder="What needs doing?" required>
  <button type="submit">Add</button>
  <div id="{description_error}" class="error"></div>
</form>
<div id="{TODO_CONTAINER_ID}">
{container}
</div>
<button hx-post="/clearDone" hx-target="#{TODO_CONTAINER_ID}" hx-swap="innerHTML">Clear done</button>"##,
        username = escape_html(username),
        description_error = id_of(DESCRIPTION_ERROR_TARGET),
        clear_errors = CLEAR_ERRORS_JS,
        reset_on_success = RESET_ON_SUCCESS_JS,
        container = render_todo_container(todos),
    );

    layout("To-do", &body)
}

/// Sign-in and registration forms
pub fn render_login() -> String {
    let body = format!(
        r#"<h1>To-do</h1>
<form hx-post="/sign-in" hx-swap="none" hx-on::before-request="{clear_errors}">
  <h2>Sign in</h2>
  <input type="text" name="username" placeholder="Username" autocomplete="username" required>
  <input type="password" name="password" placeholder="Password" autocomplete="current-password" required>
  <button type="submit">Sign in</button>
</form>
<form hx-post="/register" hx-swap="none" hx-on::before-request="{clear_errors}">
  <h2>Register</h2>
  <input type="text" name="username" placeholder="Username" autocomplete="username" required>
  <input type="password" name="password" placeholder="Password" autocomplete="new-password" required>
  <button type="submit">Register</button>
</form>
<div id="{username_error}" class="error"></div>
<div id="{password_error}" class="error"></div>"#,
        username_error = id_of(USERNAME_ERROR_TARGET),
        password_error = id_of(PASSWORD_ERROR_TARGET),
        clear_errors = CLEAR_ERRORS_JS,
    );

    layout("To-do - Sign in", &body)
}

/// The list fragment; each item carries its id and 1-based position
pub fn render_todo_container(todos: &TodoList) -> String {
    if todos.is_empty() {
        return r#"<p class="empty">Nothing to do.</p>"#.to_string();
    }

    let items: String = todos
        .iter()
        .enumerate()
        .map(|(i, item)| {
            format!(
                r#"  <li class="{class}"><label><input type="checkbox" hx-patch="/toggleCheck" hx-vals='{{"id":"{id}","i":"{position}"}}' hx-swap="none"{checked}> <span>{description}</span></label></li>
"#,
                class = if item.done { "done" } else { "open" },
                id = item.item_id,
                position = i + 1,
                checked = if item.done { " checked" } else { "" },
                description = escape_html(item.description.as_str()),
            )
        })
        .collect();

    format!("<ul class=\"todos\">\n{items}</ul>")
}
