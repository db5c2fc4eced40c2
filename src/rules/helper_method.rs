//! The retired `CreateRedirectResponse` helper
//!
//! The method ends at the first line whose first non-whitespace character is
//! `}`. That only lines up with the method's own closing brace when its body
//! has no nested blocks closing on their own line, which holds for every
//! copy of the helper in the controllers.

use super::RewriteRule;
use lazy_static::lazy_static;
use std::borrow::Cow;

const REDIRECT_HELPER_PATTERN: &str = concat!(
    r"(?ms)\s*private async Task<HttpResponseData> CreateRedirectResponse",
    r".*?^\s*\}\s*$",
);

lazy_static! {
    /// Rule C
    pub static ref REDIRECT_HELPER: RewriteRule =
        RewriteRule::new("redirect-helper", REDIRECT_HELPER_PATTERN, "")
            .expect("redirect helper pattern compiles");
}

/// Remove the private `CreateRedirectResponse` method, leaving nothing in its place
pub fn remove_redirect_helper(text: &str) -> Cow<'_, str> {
    REDIRECT_HELPER.apply(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTROLLER: &str = "public class ContentController
{
    public async Task<HttpResponseData> Get(HttpRequestData req)
    {
        return await Handle(req);
    }

    private async Task<HttpResponseData> CreateRedirectResponse(HttpRequestData req, string newEndpoint)
    {
        var response = req.CreateResponse(HttpStatusCode.MovedPermanently);
        response.Headers.Add(\"Location\", newEndpoint);
        return response;
    }
}
";

    #[test]
    fn test_helper_removed_without_replacement() {
        let cleaned = remove_redirect_helper(CONTROLLER);
        assert_eq!(
            cleaned,
            "public class ContentController
{
    public async Task<HttpResponseData> Get(HttpRequestData req)
    {
        return await Handle(req);
    }
}
"
        );
    }

    #[test]
    fn test_surrounding_lines_become_adjacent() {
        let source = "    }\n\n    private async Task<HttpResponseData> CreateRedirectResponse(Req r)\n    {\n        return Redirect(r);\n    }\n\n    public void Next() { }\n";
        assert_eq!(remove_redirect_helper(source), "    }\n    public void Next() { }\n");
    }

    #[test]
    fn test_public_helper_untouched() {
        let source = CONTROLLER.replace("private async", "public async");
        assert_eq!(remove_redirect_helper(&source), source);
    }

    #[test]
    fn test_other_return_type_untouched() {
        let source = CONTROLLER.replace("Task<HttpResponseData> CreateRedirectResponse", "Task<IActionResult> CreateRedirectResponse");
        assert_eq!(remove_redirect_helper(&source), source);
    }

    #[test]
    fn test_nested_block_truncates_match() {
        let source = "private async Task<HttpResponseData> CreateRedirectResponse(Req r)\n{\n    if (r == null)\n    {\n        return null;\n    }\n    return Redirect(r);\n}\n";
        assert_eq!(
            remove_redirect_helper(source),
            "\n    return Redirect(r);\n}\n"
        );
    }
}
