use askama::Template;

#[derive(Template)]
#[template(path = "error/not_found.html")]
pub struct NotFoundErrorTemplate;
