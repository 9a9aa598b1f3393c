use crate::design::NailDesign;

const PREAMBLE: &str = "Act as a professional beauty editor. Edit the attached photo of a hand.
Goal: Apply a photorealistic nail art design to the fingernails.

Strict Constraints:
1. PRESERVE the original hand's skin tone, lighting, shadows, and finger positions exactly. Do not regenerate the hand or background.
2. Only modify the fingernails.
3. Ensure the nail edges are sharp and realistic (perfect segmentation).
4. Apply realistic lighting reflections to the nails matching the scene.
";

const CLOSING: &str = "Output the result as a high-quality image.";

/// Build the editing instruction sent alongside the photo.
pub fn build_prompt(design: &NailDesign) -> String {
    let mut prompt = String::from(PREAMBLE);
    prompt.push_str("\nDesign Specifications:\n");
    prompt.push_str(&format!("- Nail Shape: {}\n", design.shape));
    prompt.push_str(&format!("- Nail Length: {}\n", design.length));
    prompt.push_str(&format!("- Finish/Texture: {}\n", design.finish));

    match design.pattern() {
        Some(pattern) => {
            prompt.push_str(&format!("- Design/Pattern: {pattern}\n"));
            prompt.push_str(&format!(
                "- Base Color: Use {} as a base if the design allows, or integrate it.\n",
                design.color
            ));
        }
        None => prompt.push_str(&format!("- Color: Solid color {}.\n", design.color)),
    }

    prompt.push('\n');
    prompt.push_str(CLOSING);
    prompt
}
