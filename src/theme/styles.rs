//! Global CSS styles for ReportDeck.

pub const GLOBAL_STYLES: &str = r#"
:root {
  --bg: #f4f5f7;
  --surface: #ffffff;
  --border: #d8dce1;
  --text: #1f2733;
  --text-muted: #6b7686;
  --accent: #1f6fb2;
  --accent-soft: rgba(31, 111, 178, 0.12);
  --danger: #b23a48;
}

* { box-sizing: border-box; }

body {
  margin: 0;
  background: var(--bg);
  color: var(--text);
  font-family: 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;
}

.page { padding: 1.5rem 2rem; }

.desk-header {
  display: flex;
  align-items: baseline;
  justify-content: space-between;
  border-bottom: 1px solid var(--border);
  padding-bottom: 0.75rem;
  margin-bottom: 1rem;
}

.desk-title { margin: 0; font-size: 1.4rem; }

.desk-nav__link {
  margin-left: 1rem;
  color: var(--accent);
  text-decoration: none;
}

.loading { color: var(--text-muted); padding: 2rem 0; }

/* === Breadcrumbs === */
.breadcrumb {
  display: flex;
  list-style: none;
  gap: 0.5rem;
  margin: 0 0 1rem;
  padding: 0;
}

.breadcrumb-item a { color: var(--accent); text-decoration: none; }

.breadcrumb-toggle { position: relative; }

.breadcrumb-caret {
  border: 1px solid var(--border);
  background: var(--surface);
  border-radius: 4px;
  cursor: pointer;
}

.breadcrumb-dropdown {
  position: absolute;
  top: 1.6rem;
  left: 0;
  min-width: 9rem;
  margin: 0;
  padding: 0.25rem 0;
  list-style: none;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 4px;
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.12);
  z-index: 20;
}

.breadcrumb-dropdown .dropdown-item {
  display: block;
  padding: 0.25rem 0.75rem;
  color: var(--text);
  text-decoration: none;
}

/* === Asset rail and cards === */
.asset-rail {
  max-height: 65vh;
  overflow-y: auto;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.card.asset {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 6px;
  padding: 0.9rem 1.1rem;
}

.card.asset-placeholder {
  border: 1px dashed var(--border);
  border-radius: 6px;
  min-height: 3rem;
  background: var(--accent-soft);
}

.card-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.card-ticker { margin: 0; }

.card-actions { display: flex; gap: 0.5rem; }

.card-expand, .copy-button {
  border: 1px solid var(--border);
  background: var(--surface);
  border-radius: 4px;
  padding: 0.2rem 0.6rem;
  cursor: pointer;
}

.copy-button.copied { border-color: var(--accent); color: var(--accent); }

.copy-control { position: relative; }

.copy-popover {
  position: absolute;
  top: -1.7rem;
  left: 0;
  background: var(--text);
  color: var(--surface);
  padding: 0.1rem 0.5rem;
  border-radius: 4px;
  font-size: 0.8rem;
  white-space: nowrap;
}

.card-figures {
  display: grid;
  grid-template-columns: auto 1fr;
  gap: 0.2rem 1rem;
  margin: 0.5rem 0 0;
}

.card-figures dt { color: var(--text-muted); }
.card-figures dd { margin: 0; }

/* === Modal overlay === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(15, 20, 28, 0.5);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 50;
}

.modal-dialog {
  background: var(--surface);
  border-radius: 8px;
  width: min(720px, 90vw);
  max-height: 85vh;
  overflow-y: auto;
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  border-bottom: 1px solid var(--border);
  padding: 0.75rem 1.1rem;
}

.modal-title { margin: 0; font-size: 1.1rem; }

.modal-close {
  border: none;
  background: none;
  font-size: 1.3rem;
  cursor: pointer;
  color: var(--text-muted);
}

.modal-body { padding: 1rem 1.1rem; }

/* === Report form === */
.report-form {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 6px;
  padding: 1rem 1.25rem;
  margin-bottom: 1.25rem;
}

.form-row { margin-bottom: 0.75rem; }

.form-actions { display: flex; gap: 0.75rem; }

.form-actions button {
  border: 1px solid var(--accent);
  background: var(--accent);
  color: #fff;
  border-radius: 4px;
  padding: 0.35rem 0.9rem;
  cursor: pointer;
}

.form-actions button:disabled {
  border-color: var(--border);
  background: var(--border);
  color: var(--text-muted);
  cursor: default;
}

.form-hint { color: var(--danger); margin: 0.75rem 0 0; }

/* === Sheet table === */
.sheet-table table {
  width: 100%;
  border-collapse: collapse;
  background: var(--surface);
}

.sheet-table th, .sheet-table td {
  border: 1px solid var(--border);
  padding: 0.4rem 0.7rem;
  text-align: left;
}

.sheet-table th { cursor: pointer; background: var(--accent-soft); }
.sheet-table th.sorted { color: var(--accent); }

.table-pager {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-top: 0.6rem;
}

.table-pager button {
  border: 1px solid var(--border);
  background: var(--surface);
  border-radius: 4px;
  padding: 0.2rem 0.7rem;
  cursor: pointer;
}

.table-pager button:disabled { color: var(--text-muted); cursor: default; }
"#;
