pub const RUN_PANEL_STYLES: &str = r#"
/* Layout */
.run-details {
    display: flex;
    gap: 1rem;
    align-items: flex-start;
    color: var(--text-primary, #f8fafc);
}

.run-details-main {
    flex: 1;
    min-width: 0;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

/* Cards */
.run-card {
    background: var(--window-bg, #1f2937);
    border: 1px solid var(--border-color, #374151);
    border-radius: 0.5rem;
    overflow: hidden;
}

.run-card-header {
    padding: 0.75rem 1rem;
    border-bottom: 1px solid var(--border-color, #374151);
    font-weight: 600;
}

.run-card-body {
    padding: 1rem;
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}

/* Info stats */
.info-stats {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
    gap: 1rem;
    padding: 1rem;
}

.info-stat {
    display: flex;
    flex-direction: column;
    gap: 0.25rem;
}

.info-stat-label {
    font-size: 0.75rem;
    color: var(--text-secondary, #94a3b8);
}

.info-stat-value {
    font-size: 0.875rem;
}

/* Input / output fields */
.field-row {
    display: flex;
    flex-direction: column;
    gap: 0.375rem;
}

.field-title {
    font-size: 0.875rem;
    font-weight: 500;
}

.field-value {
    margin: 0;
    padding: 0.5rem 0.75rem;
    background: var(--input-bg, #0f172a);
    border: 1px solid var(--border-color, #374151);
    border-radius: 0.375rem;
    font-size: 0.8125rem;
    white-space: pre-wrap;
    word-break: break-word;
    max-height: 320px;
    overflow: auto;
}

.field-empty {
    font-size: 0.875rem;
    color: var(--text-muted, #6b7280);
}

/* Action sidebar */
.action-sidebar {
    width: 220px;
    flex-shrink: 0;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.action-group {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.action-group-title {
    margin: 0;
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.04em;
    color: var(--text-secondary, #94a3b8);
}

.action-button {
    display: block;
    text-align: center;
    text-decoration: none;
    background: var(--accent-bg, #3b82f6);
    border: none;
    color: white;
    cursor: pointer;
    padding: 0.5rem 0.75rem;
    border-radius: 0.375rem;
    font-size: 0.875rem;
}

.action-button.secondary {
    background: transparent;
    border: 1px solid var(--border-color, #374151);
    color: var(--text-primary, #f8fafc);
}

.action-button.destructive {
    background: #dc2626;
}

.action-button:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}

/* Loading */
.loading-state {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 1.5rem;
    color: var(--text-muted, #6b7280);
    font-size: 0.875rem;
}

.loading-spinner {
    width: 1rem;
    height: 1rem;
    border: 2px solid var(--border-color, #374151);
    border-top-color: var(--accent-bg, #3b82f6);
    border-radius: 50%;
    animation: run-spin 0.8s linear infinite;
}

@keyframes run-spin {
    to { transform: rotate(360deg); }
}

/* Toasts */
.toast-stack {
    position: fixed;
    right: 1rem;
    bottom: 1rem;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    z-index: 1000;
}

.toast {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
    min-width: 280px;
    max-width: 380px;
    padding: 0.75rem 1rem;
    background: var(--window-bg, #1f2937);
    border: 1px solid var(--border-color, #374151);
    border-radius: 0.5rem;
}

.toast.destructive {
    background: #7f1d1d;
    border-color: #dc2626;
}

.toast-body {
    flex: 1;
}

.toast-title {
    margin: 0 0 0.25rem 0;
    font-weight: 600;
    font-size: 0.875rem;
}

.toast-description {
    margin: 0;
    font-size: 0.8125rem;
}

.toast-dismiss {
    background: transparent;
    border: none;
    color: inherit;
    cursor: pointer;
    font-size: 1rem;
}
"#;
