use crate::model::Character;

/// Resultado de un toggle (para toast/log).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamChange {
    Added,
    Removed,
}

/// Team de un juego: orden de inserción, único por `name`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamRoster {
    members: Vec<Character>,
}

impl TeamRoster {
    pub fn members(&self) -> &[Character] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Membresía por nombre (no por igualdad completa).
    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|c| c.name == name)
    }

    /// Si ya está (por nombre) lo saca; si no, lo agrega al final.
    pub fn toggle(&mut self, character: &Character) -> TeamChange {
        match self.members.iter().position(|c| c.name == character.name) {
            Some(idx) => {
                self.members.remove(idx);
                TeamChange::Removed
            }
            None => {
                self.members.push(character.clone());
                TeamChange::Added
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ch(name: &str, region: &str) -> Character {
        Character {
            name: name.to_string(),
            region: region.to_string(),
            image_url: format!("images/{}.png", name.to_lowercase()),
        }
    }

    #[test]
    fn toggle_adds_once_then_removes() {
        let mut team = TeamRoster::default();
        team.toggle(&ch("Bennett", "Mondstadt"));
        let before = team.len();

        assert_eq!(team.toggle(&ch("Xiangling", "Liyue")), TeamChange::Added);
        assert_eq!(team.members().iter().filter(|c| c.name == "Xiangling").count(), 1);

        assert_eq!(team.toggle(&ch("Xiangling", "Liyue")), TeamChange::Removed);
        assert_eq!(team.len(), before);
        assert!(!team.contains("Xiangling"));
    }

    #[test]
    fn membership_is_by_name_only() {
        let mut team = TeamRoster::default();
        team.toggle(&ch("Lumine", "Mondstadt"));

        // mismo nombre, otra región => se considera el mismo personaje
        let other = ch("Lumine", "Inazuma");
        assert!(team.contains(&other.name));
        assert_eq!(team.toggle(&other), TeamChange::Removed);
        assert!(team.is_empty());
    }

    #[test]
    fn keeps_insertion_order() {
        let mut team = TeamRoster::default();
        for n in ["C", "A", "B"] {
            team.toggle(&ch(n, "X"));
        }
        team.toggle(&ch("A", "X"));
        team.toggle(&ch("A", "X"));

        let names: Vec<&str> = team.members().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }
}
