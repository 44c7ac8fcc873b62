//! Stylesheet for the formkit widgets.
//!
//! Include once near the root of an app:
//!
//! ```rust,ignore
//! rsx! { style { {FORMKIT_STYLES} } }
//! ```

pub const FORMKIT_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --fk-background: #ffffff;
  --fk-foreground: #0a0a0a;
  --fk-muted: #737373;
  --fk-border: #e5e5e5;
  --fk-input: #e5e5e5;
  --fk-ring: #a3a3a3;
  --fk-accent: #f5f5f5;
  --fk-primary: #171717;
  --fk-destructive: #dc2626;
  --fk-radius: 6px;
  --fk-font: ui-sans-serif, system-ui, sans-serif;
}

@media (prefers-color-scheme: dark) {
  :root {
    --fk-background: #0a0a0a;
    --fk-foreground: #fafafa;
    --fk-muted: #a3a3a3;
    --fk-border: #262626;
    --fk-input: #262626;
    --fk-ring: #737373;
    --fk-accent: #262626;
    --fk-primary: #fafafa;
  }
}

/* === Form layout === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  margin-bottom: 1rem;
}

.input-label,
.field-label {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: 0.875rem;
  font-weight: 500;
  line-height: 1;
  user-select: none;
}

.input-label--error {
  color: var(--fk-destructive);
}

.form-description {
  color: var(--fk-muted);
  font-size: 0.875rem;
  margin: 0;
}

.form-message {
  color: var(--fk-destructive);
  font-size: 0.875rem;
  margin: 0;
}

.field-file-loaded {
  color: var(--fk-muted);
  font-size: 0.75rem;
}

/* === Text inputs === */
.input-field,
.select-field {
  width: 100%;
  height: 2.25rem;
  padding: 0.25rem 0.75rem;
  border: 1px solid var(--fk-input);
  border-radius: var(--fk-radius);
  background: transparent;
  color: var(--fk-foreground);
  font: inherit;
  font-size: 0.875rem;
  outline: none;
  transition: border-color 0.15s, box-shadow 0.15s;
}

.input-field.textarea {
  height: auto;
  min-height: 4rem;
  padding: 0.5rem 0.75rem;
  resize: vertical;
}

.input-field[type="file"] {
  padding: 0.35rem 0.75rem;
}

.input-field:focus-visible,
.select-field:focus-visible,
.select-trigger:focus-visible {
  border-color: var(--fk-ring);
  box-shadow: 0 0 0 3px color-mix(in srgb, var(--fk-ring) 50%, transparent);
}

[aria-invalid="true"] {
  border-color: var(--fk-destructive);
}

.input-field:disabled,
.select-field:disabled,
.checkbox:disabled,
.radio:disabled {
  cursor: not-allowed;
  opacity: 0.5;
}

/* === Checkbox & radio === */
.checkbox,
.radio {
  width: 1rem;
  height: 1rem;
  accent-color: var(--fk-primary);
}

.radio-group {
  display: flex;
  gap: 0.75rem;
}

/* === Switch === */
.switch {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  cursor: pointer;
}

.switch-input {
  position: absolute;
  width: 1px;
  height: 1px;
  overflow: hidden;
  clip: rect(0 0 0 0);
  white-space: nowrap;
}

.switch-track {
  position: relative;
  display: inline-flex;
  align-items: center;
  width: 2.25rem;
  height: 1.25rem;
  border: 1px solid var(--fk-input);
  border-radius: 9999px;
  background: var(--fk-input);
  transition: background-color 0.15s;
}

.switch-thumb {
  position: absolute;
  left: 0.125rem;
  width: 1rem;
  height: 1rem;
  border-radius: 9999px;
  background: var(--fk-background);
  transition: transform 0.15s;
}

.switch-input:checked + .switch-track {
  background: var(--fk-primary);
}

.switch-input:checked + .switch-track .switch-thumb {
  transform: translateX(1rem);
}

.switch-input:disabled + .switch-track {
  opacity: 0.5;
}

/* === Custom select === */
.select-anchor {
  position: relative;
}

.select-trigger {
  display: flex;
  align-items: center;
  justify-content: space-between;
  width: 100%;
  height: 2.25rem;
  padding: 0.25rem 0.75rem;
  border: 1px solid var(--fk-input);
  border-radius: var(--fk-radius);
  background: var(--fk-background);
  color: var(--fk-foreground);
  font-size: 0.875rem;
  cursor: pointer;
}

.select-value--placeholder {
  color: var(--fk-muted);
}

.select-content {
  z-index: 50;
  width: 100%;
  min-width: 10rem;
  margin-top: 0.25rem;
  padding: 0.25rem;
  border: 1px solid var(--fk-input);
  border-radius: var(--fk-radius);
  background: var(--fk-background);
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.12);
}

.select-content--anchored {
  position: absolute;
  left: 0;
  margin-top: 0;
}

.select-content--above {
  bottom: 100%;
  margin-bottom: 0.25rem;
}

.select-content--below {
  top: 100%;
  margin-top: 0.25rem;
}

.select-item {
  display: block;
  width: 100%;
  padding: 0.25rem 0.5rem;
  border: none;
  border-radius: 4px;
  background: transparent;
  color: inherit;
  font-size: 0.75rem;
  text-align: left;
  cursor: pointer;
}

.select-item:hover,
.select-item[aria-selected="true"] {
  background: var(--fk-accent);
}

/* === Table === */
.table-container {
  position: relative;
  width: 100%;
  overflow-x: auto;
}

.table {
  width: 100%;
  border-collapse: collapse;
  font-size: 0.875rem;
  caption-side: bottom;
}

.table-row {
  border-bottom: 1px solid var(--fk-border);
}

.table-row[data-state="selected"] {
  background: var(--fk-accent);
}

.table-head {
  height: 2.5rem;
  padding: 0 0.5rem;
  text-align: left;
  font-weight: 500;
  white-space: nowrap;
}

.table-cell {
  padding: 0.5rem;
  vertical-align: middle;
}

.table-empty {
  color: var(--fk-muted);
  text-align: center;
}

.table-caption {
  margin-top: 1rem;
  color: var(--fk-muted);
}

.table-thumb {
  width: 2.5rem;
  height: 2.5rem;
  object-fit: cover;
  border-radius: 4px;
}
"#;
