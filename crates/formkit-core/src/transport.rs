//! Schema transport
//!
//! A schema module bundles everything a form needs: validation schemas for
//! both shapes, the UI map, a defaults factory, converters and the field
//! order. [`make_schema_transport`] hands the same members on to consumers
//! so they do not import the schema module directly.

use std::fmt;
use std::sync::Arc;

use crate::error::{FormError, Result};
use crate::form::FormValues;
use crate::schema::{Schema, UiMap};

/// A schema module for form values `F` and domain values `D`
pub struct SchemaModule<F, D> {
    pub form_schema: Arc<dyn Schema<F>>,
    pub domain_schema: Arc<dyn Schema<D>>,
    pub ui: Arc<UiMap>,
    pub form_defaults: fn() -> F,
    pub to_domain: fn(&F) -> Result<D>,
    pub to_form_values: fn(&D) -> F,
    pub field_order: Arc<[String]>,
}

/// The members of a [`SchemaModule`], re-exported unchanged
pub struct SchemaTransport<F, D> {
    pub form_schema: Arc<dyn Schema<F>>,
    pub domain_schema: Arc<dyn Schema<D>>,
    pub ui: Arc<UiMap>,
    pub form_defaults: fn() -> F,
    pub to_domain: fn(&F) -> Result<D>,
    pub to_form_values: fn(&D) -> F,
    pub field_order: Arc<[String]>,
}

/// Shallow copy of a schema module's members
pub fn make_schema_transport<F, D>(schema: &SchemaModule<F, D>) -> SchemaTransport<F, D> {
    SchemaTransport {
        form_schema: Arc::clone(&schema.form_schema),
        domain_schema: Arc::clone(&schema.domain_schema),
        ui: Arc::clone(&schema.ui),
        form_defaults: schema.form_defaults,
        to_domain: schema.to_domain,
        to_form_values: schema.to_form_values,
        field_order: Arc::clone(&schema.field_order),
    }
}

impl<F, D> Clone for SchemaTransport<F, D> {
    fn clone(&self) -> Self {
        SchemaTransport {
            form_schema: Arc::clone(&self.form_schema),
            domain_schema: Arc::clone(&self.domain_schema),
            ui: Arc::clone(&self.ui),
            form_defaults: self.form_defaults,
            to_domain: self.to_domain,
            to_form_values: self.to_form_values,
            field_order: Arc::clone(&self.field_order),
        }
    }
}

impl<F, D> fmt::Debug for SchemaTransport<F, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaTransport")
            .field("ui", &self.ui)
            .field("field_order", &self.field_order)
            .finish_non_exhaustive()
    }
}

impl<F, D> SchemaTransport<F, D> {
    /// Fresh default form values
    pub fn defaults(&self) -> F {
        (self.form_defaults)()
    }

    pub fn validate_form(&self, values: &F) -> Result<()> {
        self.form_schema
            .validate(values)
            .map_err(FormError::Validation)
    }

    /// Validate form values, convert them and validate the domain value
    pub fn submit(&self, values: &F) -> Result<D> {
        self.validate_form(values)?;
        let domain = (self.to_domain)(values)?;
        self.domain_schema
            .validate(&domain)
            .map_err(FormError::Validation)?;
        tracing::debug!(fields = self.field_order.len(), "form submitted");
        Ok(domain)
    }

    /// Form values for editing an existing domain value
    pub fn edit(&self, domain: &D) -> F {
        (self.to_form_values)(domain)
    }
}

impl<D> SchemaTransport<FormValues, D> {
    /// Run the form schema and record its issues as field errors.
    /// A passing run clears every error.
    pub fn validate_and_record(&self, values: &mut FormValues) -> Result<()> {
        match self.form_schema.validate(values) {
            Ok(()) => {
                values.clear_errors();
                Ok(())
            }
            Err(issues) => {
                values.apply_issues(&issues);
                Err(FormError::Validation(issues))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldIssue;
    use crate::form::FormValues;
    use crate::schema::FieldMeta;

    #[derive(Debug, PartialEq)]
    struct Note {
        title: String,
    }

    fn defaults() -> FormValues {
        FormValues::new().with("title", "")
    }

    fn to_domain(values: &FormValues) -> Result<Note> {
        Ok(Note {
            title: values.text("title").trim().to_string(),
        })
    }

    fn to_form(note: &Note) -> FormValues {
        FormValues::new().with("title", note.title.clone())
    }

    fn module() -> SchemaModule<FormValues, Note> {
        SchemaModule {
            form_schema: Arc::new(|v: &FormValues| {
                if v.text("title").is_empty() {
                    Err(vec![FieldIssue::new("title", "required")])
                } else {
                    Ok(())
                }
            }),
            domain_schema: Arc::new(|n: &Note| {
                if n.title.is_empty() {
                    Err(vec![FieldIssue::new("title", "blank")])
                } else {
                    Ok(())
                }
            }),
            ui: Arc::new(UiMap::from([("title".into(), FieldMeta::input("Title"))])),
            form_defaults: defaults,
            to_domain,
            to_form_values: to_form,
            field_order: Arc::from(vec!["title".to_string()]),
        }
    }

    #[test]
    fn transport_shares_module_references() {
        let module = module();
        let transport = make_schema_transport(&module);
        assert!(Arc::ptr_eq(&module.ui, &transport.ui));
        assert!(Arc::ptr_eq(&module.field_order, &transport.field_order));
        assert!(Arc::ptr_eq(&module.form_schema, &transport.form_schema));
        assert!(Arc::ptr_eq(&module.domain_schema, &transport.domain_schema));
        assert_eq!(transport.defaults(), defaults());
    }

    #[test]
    fn submit_rejects_invalid_form_values() {
        let transport = make_schema_transport(&module());
        let err = transport.submit(&transport.defaults()).unwrap_err();
        assert!(matches!(err, FormError::Validation(issues) if issues[0].field == "title"));
    }

    #[test]
    fn submit_runs_domain_schema_after_conversion() {
        let transport = make_schema_transport(&module());
        let err = transport
            .submit(&FormValues::new().with("title", "   "))
            .unwrap_err();
        assert!(matches!(err, FormError::Validation(issues) if issues[0].message == "blank"));
    }

    #[test]
    fn validate_and_record_writes_and_clears_field_errors() {
        let transport = make_schema_transport(&module());
        let mut values = transport.defaults();
        assert!(transport.validate_and_record(&mut values).is_err());
        assert_eq!(values.error("title"), Some("required"));

        let mut values = values.with("title", "seeds");
        transport.validate_and_record(&mut values).unwrap();
        assert_eq!(values.error("title"), None);
    }

    #[test]
    fn submit_and_edit_convert_between_shapes() {
        let transport = make_schema_transport(&module());
        let note = transport
            .submit(&FormValues::new().with("title", " seeds "))
            .unwrap();
        assert_eq!(note.title, "seeds");
        assert_eq!(transport.edit(&note).text("title"), "seeds");
    }
}
