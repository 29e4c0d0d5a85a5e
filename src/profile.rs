/// Site owner's public contact details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerProfile {
    pub full_name: String,
    pub phone: String,
    pub whatsapp: String,
    pub email: String,
    pub bio: String,
    pub skills: Vec<String>,
}

impl Default for OwnerProfile {
    fn default() -> Self {
        Self {
            full_name: "Mahad Khan".to_string(),
            phone: "03142253977".to_string(),
            whatsapp: "+923142253977".to_string(),
            email: "khanmahad768@gmail.com".to_string(),
            bio: "A digital architect building next-gen solutions.".to_string(),
            skills: ["React", "Node.js", "Tailwind", "SEO", "Growth Hacking"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl OwnerProfile {
    /// vCard 3.0, lines joined with `\n`.
    pub fn to_vcard(&self) -> String {
        [
            "BEGIN:VCARD".to_string(),
            "VERSION:3.0".to_string(),
            format!("FN:{}", self.full_name),
            format!("TEL;TYPE=CELL:{}", self.phone),
            format!("EMAIL:{}", self.email),
            "END:VCARD".to_string(),
        ]
        .join("\n")
    }

    /// "Mahad Khan" -> "Mahad_Khan.vcf"
    pub fn vcard_file_name(&self) -> String {
        format!("{}.vcf", self.full_name.split_whitespace().collect::<Vec<_>>().join("_"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vcard() {
        let card = OwnerProfile::default().to_vcard();
        assert_eq!(
            card,
            "BEGIN:VCARD\nVERSION:3.0\nFN:Mahad Khan\nTEL;TYPE=CELL:03142253977\nEMAIL:khanmahad768@gmail.com\nEND:VCARD"
        );
    }

    #[test]
    fn test_vcard_file_name() {
        assert_eq!(OwnerProfile::default().vcard_file_name(), "Mahad_Khan.vcf");
    }
}
