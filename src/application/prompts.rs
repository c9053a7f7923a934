//! Prompt templates for the analysis and chat flows.
//!
//! Everything in this module is a pure transformation: the templates are
//! compile-time constants and only the document text is interpolated, so
//! identical inputs always produce identical payloads.

/// Closing sentence appended verbatim to every analysis.
pub const LEGAL_DISCLAIMER: &str = "This is an AI-generated analysis and not a substitute for professional legal advice. Consult with a qualified attorney for any legal concerns.";

/// System instruction for the conversational flow. The model answers only
/// from the attached document and says so when the answer is not in it.
pub const CHAT_SYSTEM_INSTRUCTION: &str = "You are a helpful legal assistant. Answer the user's questions using only the provided document. If the answer is not present in the document, state that explicitly instead of guessing.";

/// Builds the one-shot analysis prompt around extracted document text.
pub fn build_analysis_prompt(document_text: &str) -> String {
    format!(
        r#"You are an expert AI legal assistant. Your task is to analyze the following legal document and provide a clear, easy-to-understand summary for a non-lawyer.

**Document Text:**
---
{document_text}
---

**Analysis Required:**
Please structure your response using Markdown with the following format. If a section is not applicable, state "Not found in document."

1.  **Document Summary:** In 2-3 sentences, what is the main purpose of this document?

2.  **Key Parties Involved:**
    *   List all individuals or entities and their roles (e.g., Landlord, Tenant, Lender, Borrower).

3.  **Potential Risks & Red Flags:**
    *   Highlight any clauses that are one-sided, unusual, or could pose a financial or legal risk to a layperson. Explain *why* it's a risk in simple terms.

4.  **Major Obligations & Responsibilities:**
    *   **For Party A (e.g., Tenant):** What are their main duties?
    *   **For Party B (e.g., Landlord):** What are their main duties?
    *   (Continue for all parties)

5.  **Critical Dates & Deadlines:**
    *   List any important dates (e.g., Effective Date, Termination Date, Notice Periods, Payment Due Dates).

6.  **Glossary of Jargon:**
    *   Define 3-5 of the most confusing legal terms found in the document in plain English.

**Disclaimer:** Always conclude your response with: "{LEGAL_DISCLAIMER}"
"#
    )
}
