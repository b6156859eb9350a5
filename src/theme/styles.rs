//! Global CSS styles for the qrdrop window.
//!
//! Light card layout: blue accents for the drop zone and download,
//! green for the main action.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --page-bg: #f5f7fa;
  --card-bg: #ffffff;
  --card-border: #eeeeee;

  /* BLUE (Drop zone, links, download) */
  --blue: #1976d2;
  --blue-dark: #1565c0;
  --blue-tint: #e3f2fd;

  /* GREEN (Primary action) */
  --green: #43a047;
  --green-dark: #388e3c;

  /* TEXT */
  --text-primary: #212121;
  --text-secondary: #555555;
  --text-on-accent: #ffffff;

  /* Typography */
  --font-sans: 'Roboto', 'Helvetica Neue', Arial, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 200ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--page-bg);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

/* === Layout === */
.app-shell {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1.5rem;
}

.upload-card {
  width: 100%;
  max-width: 560px;
  padding: 2.5rem;
  background: var(--card-bg);
  border-radius: 16px;
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
}

.upload-card__title {
  text-align: center;
  font-size: 2rem;
  font-weight: 700;
  color: var(--blue);
  margin-bottom: 1rem;
}

/* === Drop Zone === */
.drop-zone {
  border: 2px dashed var(--blue);
  border-radius: 12px;
  padding: 2rem;
  text-align: center;
  background: var(--page-bg);
  cursor: pointer;
  margin-bottom: 1rem;
  transition: background var(--transition-normal);
}

.drop-zone--active {
  background: var(--blue-tint);
}

.drop-zone__prompt {
  color: var(--blue);
  font-weight: 700;
}

.drop-zone__hint {
  color: var(--text-secondary);
  font-size: 0.875rem;
  margin: 0.5rem 0 1rem;
}

/* === Buttons === */
.btn-primary,
.btn-secondary,
.btn-outline {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  min-height: 2.5rem;
  padding: 0.5rem 1.25rem;
  border-radius: 6px;
  font-family: inherit;
  font-weight: 700;
  text-transform: uppercase;
  cursor: pointer;
  transition: background var(--transition-fast), opacity var(--transition-fast);
}

.btn-primary {
  border: none;
  background: var(--green);
  color: var(--text-on-accent);
  font-size: 1.125rem;
}

.btn-primary:hover:not(:disabled) {
  background: var(--green-dark);
}

.btn-secondary {
  border: none;
  background: var(--blue);
  color: var(--text-on-accent);
}

.btn-secondary:hover:not(:disabled) {
  background: var(--blue-dark);
}

.btn-outline {
  border: 1px solid var(--blue);
  background: transparent;
  color: var(--blue);
}

.btn-outline:hover:not(:disabled) {
  background: var(--blue-tint);
}

.btn-block {
  display: flex;
  width: 100%;
}

.upload-btn {
  padding: 0.75rem 1.25rem;
  margin-bottom: 1rem;
}

button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

/* === Spinner === */
.loading-spinner {
  display: inline-block;
  border-style: solid;
  border-color: currentColor;
  border-right-color: transparent;
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Result === */
.result {
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
}

.result__title {
  font-size: 1.25rem;
  font-weight: 500;
  color: var(--blue);
  margin-bottom: 1rem;
}

.result__image {
  padding: 10px;
  border-radius: 8px;
  border: 1px solid var(--card-border);
  background: var(--card-bg);
}

.result__download {
  margin-top: 1rem;
}
"#;
