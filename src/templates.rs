use handlebars::{Handlebars, TemplateError};


/// Builds the strict-mode registry holding every page template.
pub fn registry() -> Result<Handlebars<'static>, TemplateError> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars.register_template_string("template", include_str!("templates/template.hbs"))?;
    handlebars.register_template_string("index", include_str!("templates/index.hbs"))?;
    handlebars.register_template_string("errors/500", include_str!("templates/errors/500.hbs"))?;
    Ok(handlebars)
}
