// Shared prompt fragments used by more than one document kind.
// Each kind's full template lives in generation::prompts.

/// Output contract appended to every system prompt: a bare HTML fragment.
pub const HTML_ONLY_INSTRUCTION: &str = "\
    Respond with HTML only. \
    Do NOT wrap the output in markdown code fences. \
    Do NOT include <html>, <head> or <style> elements; styling is applied separately. \
    Do NOT include explanations or commentary before or after the HTML.";

/// Keeps generated documents factual.
pub const GROUNDING_INSTRUCTION: &str = "\
    CRITICAL: Use only facts present in the resume data provided. \
    Do NOT invent employers, dates, degrees, metrics or skills. \
    If a section is absent from the data, omit it entirely rather than rendering it empty.";
