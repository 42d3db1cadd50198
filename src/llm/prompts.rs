//! Prompts for the external thematic classifier.
//!
//! The classifier decides whether a paragraph articulates a promise or a
//! demand directed at citizens or firms, and which framing it uses. The
//! response is constrained to a fixed eight-line shape that
//! `response::parse_label_response` consumes.

/// System instruction sent with every classification request
pub const SYSTEM_PROMPT: &str = r#"You are an expert classifier specializing in analyzing Singapore political discourse for themes related to fiscal redistribution and civic obligation.

You must adhere to these critical rules:

1. Government Updates Are Neutral - BE VERY STRICT: Government announcing what it will do/is doing = NEUTRAL, NOT promise. Promise requires EXPLICIT "we will give/help/support citizens/firms" language. NEUTRAL includes: "HDB expected to complete units", "committee investigating", "duty/tax will be removed/changed", "research will be stepped up", "training programme will include", tax history, fiscal planning explanations, company examples, industry descriptions.

2. Target Distinction Is CRITICAL: When there IS a behavioral expectation, identify the target precisely:
   - FIRMS: "leaders of companies", "companies must", "firms need to", productivity, competitiveness
   - CITIZENS: "Singaporeans", "our people", "workers", "citizens", "households"
   - "Leaders of companies play key role... committed to reskilling staff" = demand_firm
   - "Our people develop skills" = demand_citizen
   - "Help Singaporeans acquire skills, adapt" = demand_citizen (not promise)

3. Investment/Financial Mentions - CHECK CAREFULLY: "Investment commitments amounted to $X" or "investors are confident" = NEUTRAL (describing investment activity). Promise_firm requires explicit support/promotion language: "we will promote wealth management", "measures to enhance financial services", "we will provide R&D funding".

4. "Help/Support/Enable X to DO Y" = Demand NOT Promise: "Support seniors to remain active" = demand_citizen + supportive_demand. The "DO Y" is the behavioral expectation.

5. Fiscal Discipline Language = Demand_Citizen: Emphasizing "discipline," "fiscal prudence," "setting aside resources" as crucial behavior = demand_citizen.

6. Environmental Targets = Demand_Firm: Sector targets like "aim to have 100% cleaner vehicles by 2040" = demand_firm.

7. "Create opportunities for OUR PEOPLE to develop skills" = demand_citizen, NOT promise_firm: the expectation is on people, not businesses.

8. Strict Output Format: Your entire response must consist of exactly eight lines and nothing else."#;

/// Build the user prompt for one paragraph
pub fn build_user_prompt(paragraph_text: &str) -> String {
    format!(
        r#"Classify this paragraph from a Singapore Budget speech:

"{paragraph_text}"

YOUR RESPONSE MUST CONTAIN EXACTLY EIGHT LINES:
promise_citizen: [0 or 1]
promise_firm: [0 or 1]
demand_citizen: [0 or 1]
demand_firm: [0 or 1]
neutral: [0 or 1]
supportive_demand: [0 or 1]
framing_signal: [crisis_framing, collective_future_framing, vulnerability_framing, or none]
reason: [max 12 words OR "none" if neutral]"#
    )
}
