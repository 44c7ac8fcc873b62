//! Layout styles for the desktop demo. Widget styles come from
//! `formkit_ui::FORMKIT_STYLES`.

pub const APP_STYLES: &str = r#"
body {
  margin: 0;
  background: var(--fk-background);
  color: var(--fk-foreground);
  font-family: var(--fk-font);
}

.app {
  display: grid;
  grid-template-columns: minmax(0, 3fr) minmax(0, 2fr);
  gap: 2rem;
  max-width: 1100px;
  margin: 0 auto;
  padding: 2rem;
}

.app-title {
  grid-column: 1 / -1;
  margin: 0;
  font-size: 1.5rem;
  font-weight: 600;
}

.panel {
  padding: 1.25rem;
  border: 1px solid var(--fk-border);
  border-radius: 8px;
}

.panel h2 {
  margin: 0 0 1rem;
  font-size: 1rem;
  font-weight: 600;
}

.items {
  grid-column: 1 / -1;
}

.form-actions {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.btn-primary {
  height: 2.25rem;
  padding: 0 1rem;
  border: none;
  border-radius: var(--fk-radius);
  background: var(--fk-primary);
  color: var(--fk-background);
  font-size: 0.875rem;
  font-weight: 500;
  cursor: pointer;
}

.btn-primary:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.status {
  color: var(--fk-muted);
  font-size: 0.875rem;
}

.option-row {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.75rem;
}

.table--compact .table-cell {
  padding: 0.25rem 0.5rem;
}
"#;
