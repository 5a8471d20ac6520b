//! Fixed phrase pools GrandPy picks its wording from.

use crate::kernel::PhraseSelector;

pub const POSITIVE_ANSWERS: [&str; 4] = [
    "Bien sûr mon poussin ! Voici ce que tu cherches :",
    "J'ai trouvé ce que tu cherches ! Voici les infos qui t'intéressent :",
    "Je savais que je connaissais cet endroit ! Voici ce que j'en sais :",
    "C'est bien parce que c'est toi ! Voici l'adresse :",
];

pub const NEGATIVE_ANSWERS: [&str; 3] = [
    "À mon âge, on n'entend plus très bien. Pourrais-tu répéter plus fort ?",
    "Mes oreilles ne sont plus de toute jeunesse, peux-tu répéter ?",
    "Je n'ai pas compris ta question, peux-tu la reformuler ?",
];

pub const ARTICLE_INTROS: [&str; 4] = [
    "Au fait, cela me rappelle :",
    "Mes souvenirs datent un peu, mais voici ce dont je me souviens :",
    "Je me rappelle de ceci, ça peut t'intéresser :",
    "Voici ce que la mémoire d'un vieil homme peut ajouter :",
];

/// Pick one phrase from a non-empty pool.
pub fn pick(pool: &[&str], selector: &dyn PhraseSelector) -> String {
    pool[selector.select(pool.len()) % pool.len()].to_string()
}
