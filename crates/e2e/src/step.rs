//! Typed browser steps rendered to Playwright JavaScript
//!
//! Page objects describe user interactions as [`Step`] values; the session
//! assembles them into one Playwright script executed by `node`. Keeping the
//! vocabulary typed means selectors and flow logic live in Rust while the
//! browser automation itself stays with Playwright.

/// How an element is located on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Raw CSS selector
    Css(String),
    /// Playwright `getByPlaceholder`
    Placeholder(String),
    /// Playwright `getByRole` with an accessible name
    Role { role: String, name: String },
    /// Playwright `getByText`
    Text(String),
}

/// A selector plus the refinements the flows need
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    pub selector: Selector,
    /// Restrict to elements containing this text (`filter({ hasText })`)
    pub has_text: Option<String>,
    /// Take only the first match
    pub first: bool,
    /// Narrow to a CSS descendant of the matched element
    pub descendant: Option<String>,
}

impl Locator {
    pub fn css(selector: impl Into<String>) -> Self {
        Self::new(Selector::Css(selector.into()))
    }

    pub fn placeholder(placeholder: impl Into<String>) -> Self {
        Self::new(Selector::Placeholder(placeholder.into()))
    }

    pub fn role(role: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(Selector::Role {
            role: role.into(),
            name: name.into(),
        })
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(Selector::Text(text.into()))
    }

    fn new(selector: Selector) -> Self {
        Self {
            selector,
            has_text: None,
            first: false,
            descendant: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.has_text = Some(text.into());
        self
    }

    pub fn first(mut self) -> Self {
        self.first = true;
        self
    }

    pub fn descendant(mut self, css: impl Into<String>) -> Self {
        self.descendant = Some(css.into());
        self
    }

    /// Render as a Playwright locator expression.
    pub fn to_js(&self) -> String {
        let mut js = match &self.selector {
            Selector::Css(css) => format!("page.locator({})", js_quote(css)),
            Selector::Placeholder(p) => format!("page.getByPlaceholder({})", js_quote(p)),
            Selector::Role { role, name } => {
                format!("page.getByRole({}, {{ name: {} }})", js_quote(role), js_quote(name))
            }
            Selector::Text(t) => format!("page.getByText({})", js_quote(t)),
        };
        if let Some(text) = &self.has_text {
            js.push_str(&format!(".filter({{ hasText: {} }})", js_quote(text)));
        }
        if self.first {
            js.push_str(".first()");
        }
        if let Some(css) = &self.descendant {
            js.push_str(&format!(".locator({})", js_quote(css)));
        }
        js
    }

    /// Short form for step names in error messages.
    fn describe(&self) -> &str {
        match &self.selector {
            Selector::Css(s) => s,
            Selector::Placeholder(s) => s,
            Selector::Role { name, .. } => name,
            Selector::Text(s) => s,
        }
    }
}

/// Element state to wait for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WaitState {
    #[default]
    Visible,
    Hidden,
    Attached,
    Detached,
}

impl WaitState {
    fn as_str(self) -> &'static str {
        match self {
            WaitState::Visible => "visible",
            WaitState::Hidden => "hidden",
            WaitState::Attached => "attached",
            WaitState::Detached => "detached",
        }
    }
}

/// A single browser interaction
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Navigate to a path relative to the frontend base URL
    Goto { path: String },

    /// Reload the current page
    Reload,

    /// Wait for an element to reach a state
    WaitFor { locator: Locator, state: WaitState },

    /// Fill an input field
    Fill { locator: Locator, value: String },

    /// Click an element
    Click { locator: Locator, force: bool },

    /// Click and assert the status of the API response it triggers
    ClickExpectingResponse {
        locator: Locator,
        url_contains: String,
        method: String,
        status: u16,
    },

    /// Dispatch a DOM event on an element
    DispatchEvent { locator: Locator, event: String },

    /// Write a key into localStorage
    SetLocalStorage { key: String, value: String },

    /// Wait for the page URL to match a regular expression
    WaitForUrl { pattern: String },

    /// Assert an input's current value
    ExpectValue { locator: Locator, value: String },

    /// Assert an input holds some non-empty value
    ExpectNonEmptyValue { locator: Locator },

    /// Assert how many elements match
    ExpectCount { locator: Locator, count: usize },

    /// Collect article previews under `locator` into the result object
    ExtractArticles { locator: Locator, result_key: String },
}

impl Step {
    /// Name used in failure reports, mirroring the `action:target` shape of
    /// the suite's logs.
    pub fn name(&self) -> String {
        match self {
            Step::Goto { path } => format!("goto:{path}"),
            Step::Reload => "reload".to_string(),
            Step::WaitFor { locator, state } => {
                format!("wait[{}]:{}", state.as_str(), locator.describe())
            }
            Step::Fill { locator, .. } => format!("fill:{}", locator.describe()),
            Step::Click { locator, .. } => format!("click:{}", locator.describe()),
            Step::ClickExpectingResponse { locator, url_contains, .. } => {
                format!("click+await[{}]:{}", url_contains, locator.describe())
            }
            Step::DispatchEvent { locator, event } => {
                format!("dispatch[{}]:{}", event, locator.describe())
            }
            Step::SetLocalStorage { key, .. } => format!("localStorage:{key}"),
            Step::WaitForUrl { pattern } => format!("wait-url:{pattern}"),
            Step::ExpectValue { locator, .. } => format!("expect-value:{}", locator.describe()),
            Step::ExpectNonEmptyValue { locator } => {
                format!("expect-non-empty:{}", locator.describe())
            }
            Step::ExpectCount { locator, count } => {
                format!("expect-count[{}]:{}", count, locator.describe())
            }
            Step::ExtractArticles { result_key, .. } => format!("extract:{result_key}"),
        }
    }

    /// Render the step body. `timeout_ms` applies to waits and actions.
    pub fn to_js(&self, timeout_ms: u64) -> String {
        match self {
            Step::Goto { path } => {
                format!("    await page.goto(baseUrl + {});", js_quote(path))
            }
            Step::Reload => "    await page.reload();".to_string(),
            Step::WaitFor { locator, state } => format!(
                "    await {}.waitFor({{ state: '{}', timeout: {} }});",
                locator.to_js(),
                state.as_str(),
                timeout_ms
            ),
            Step::Fill { locator, value } => {
                format!("    await {}.fill({});", locator.to_js(), js_quote(value))
            }
            Step::Click { locator, force } => format!(
                "    await {}.click({{ force: {}, timeout: {} }});",
                locator.to_js(),
                force,
                timeout_ms
            ),
            Step::ClickExpectingResponse {
                locator,
                url_contains,
                method,
                status,
            } => format!(
                r#"    {{
      const [response] = await Promise.all([
        page.waitForResponse((resp) => resp.url().includes({url}) && resp.request().method() === {method}, {{ timeout: {timeout} }}),
        {loc}.click(),
      ]);
      if (response.status() !== {status}) {{
        throw new Error(`expected {status} from ${{response.url()}}, got ${{response.status()}}`);
      }}
    }}"#,
                url = js_quote(url_contains),
                method = js_quote(method),
                loc = locator.to_js(),
                status = status,
                timeout = timeout_ms,
            ),
            Step::DispatchEvent { locator, event } => format!(
                "    await {}.dispatchEvent({});",
                locator.to_js(),
                js_quote(event)
            ),
            Step::SetLocalStorage { key, value } => format!(
                "    await page.evaluate(([k, v]) => localStorage.setItem(k, v), [{}, {}]);",
                js_quote(key),
                js_quote(value)
            ),
            Step::WaitForUrl { pattern } => format!(
                "    await page.waitForURL(new RegExp({}), {{ timeout: {} }});",
                js_quote(pattern),
                timeout_ms
            ),
            Step::ExpectValue { locator, value } => format!(
                r#"    {{
      const value = await {}.inputValue();
      if (value !== {expected}) {{
        throw new Error(`expected value ${{JSON.stringify(value)}} to equal {expected_msg}`);
      }}
    }}"#,
                locator.to_js(),
                expected = js_quote(value),
                expected_msg = js_quote(value).replace('`', ""),
            ),
            Step::ExpectNonEmptyValue { locator } => format!(
                r#"    {{
      const value = await {}.inputValue();
      if (value === '') {{
        throw new Error('expected a non-empty value');
      }}
    }}"#,
                locator.to_js()
            ),
            Step::ExpectCount { locator, count } => format!(
                r#"    {{
      const count = await {}.count();
      if (count !== {count}) {{
        throw new Error(`expected {count} matching element(s), found ${{count}}`);
      }}
    }}"#,
                locator.to_js(),
                count = count,
            ),
            Step::ExtractArticles { locator, result_key } => format!(
                r#"    {{
      const previews = [];
      for (const article of await {loc}.all()) {{
        const text = (await article.textContent()) || '';
        if (text.includes('Loading') || text.includes('No articles')) {{
          continue;
        }}
        const favText = (await article.locator('.btn-outline-primary').textContent()) || '0';
        previews.push({{
          title: (await article.locator('.preview-link h1').textContent()) || '',
          description: (await article.locator('.preview-link p').textContent()) || '',
          author: (await article.locator('.author').first().textContent()) || '',
          favorites_count: parseInt(favText.trim(), 10) || 0,
        }});
      }}
      results[{key}] = previews;
    }}"#,
                loc = locator.to_js(),
                key = js_quote(result_key),
            ),
        }
    }
}

/// Quote a string as a single-quoted JS literal.
pub fn js_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}
