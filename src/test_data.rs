#[cfg(test)]
pub const POST_DATA: &str = r##"# Post de correction
type: fix
titre: "Crash au démarrage: <b>écran</b> noir?"
objet: Correction du crash & nettoyage
contexte: L'application plantait au lancement.
corps: |
  Ligne 1
  Ligne 2
resultats: Plus de crash
auteur: Thiago
"##;

#[cfg(test)]
pub const POST_DATA_NO_AUTHOR: &str = r##"type: test
titre: Sans auteur
objet: Objet
contexte: Contexte
corps: Corps
resultats: Resultats
"##;
