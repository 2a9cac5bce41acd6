use genegram::grammar::Grammar;
use genegram::SmilesCodec;

#[test]
fn test_encode_gene_decode_roundtrip() {
    let codec = SmilesCodec::new().unwrap();
    let smiles = "CC(c1c(CC)cc(C=O)cc1)(CC(CO)CC)";

    let indices = codec.encode(smiles).expect("molecule should parse");
    let gene = codec.to_gene(&indices, None).unwrap();
    assert_eq!(gene.len(), indices.len());

    let decoded_indices = codec.from_gene(&gene);
    assert_eq!(decoded_indices, indices);

    let reconstructed = codec.decode(&decoded_indices).unwrap();
    assert_eq!(reconstructed, smiles);
}

#[test]
fn test_roundtrip_with_bracket_atoms() {
    let codec = SmilesCodec::new().unwrap();
    for smiles in ["CC(=O)OCC[N+](C)(C)C", "Cl[Pt](Cl)Cl", "C[Si](C)(C)Br"] {
        let indices = codec.encode(smiles).expect("molecule should parse");
        let gene = codec.to_gene(&indices, None).unwrap();
        let reconstructed = codec.decode(&codec.from_gene(&gene)).unwrap();
        assert_eq!(reconstructed, smiles);
    }
}

#[test]
fn test_two_char_terminal_survives_roundtrip() {
    let codec = SmilesCodec::new().unwrap();
    let indices = codec.encode("CCl").unwrap();
    assert_eq!(codec.decode(&indices).unwrap(), "CCl");
}

#[test]
fn test_unparsable_input_yields_none() {
    let codec = SmilesCodec::new().unwrap();
    assert_eq!(codec.encode("not a molecule"), None);
    assert_eq!(codec.encode("C("), None);
    assert_eq!(codec.encode(""), None);
}

#[test]
fn test_fixed_length_gene_preserves_roundtrip() {
    let codec = SmilesCodec::new().unwrap();
    let smiles = "c1ccccc1";

    let indices = codec.encode(smiles).unwrap();
    assert!(indices.len() < 100);
    let gene = codec.to_gene(&indices, Some(100)).unwrap();
    assert_eq!(gene.len(), 100);

    // Padding codons sit past the complete derivation and are never
    // consumed.
    let reconstructed = codec.decode(&codec.from_gene(&gene)).unwrap();
    assert_eq!(reconstructed, smiles);
}

#[test]
fn test_truncated_gene_keeps_choice_prefix() {
    let codec = SmilesCodec::new().unwrap();
    let smiles = "CC(c1c(CC)cc(C=O)cc1)(CC(CO)CC)";

    let indices = codec.encode(smiles).unwrap();
    assert!(indices.len() > 5);
    let gene = codec.to_gene(&indices, Some(5)).unwrap();
    assert_eq!(gene.len(), 5);

    // Decoding replays the first five expansion choices, then stops.
    let partial = codec.from_gene(&gene);
    assert_eq!(partial, indices[..5].to_vec());
    // The partial derivation has no renderable string.
    assert_eq!(codec.decode(&partial).unwrap(), "");
}

#[test]
fn test_toy_grammar_decode_scenario() {
    let toy = Grammar::from_text("S -> A | B\nA -> 'x'\nB -> 'y'", "Nothing").unwrap();
    let codec = SmilesCodec::with_grammar(toy, &[]).unwrap();

    let indices = codec.encode("x").unwrap();
    assert_eq!(indices, vec![0, 2]);
    assert_eq!(codec.to_gene(&indices, None).unwrap(), vec![0, 0]);

    // Codon 1 flips the start choice to S -> B regardless of the rest.
    assert_eq!(codec.decode(&codec.from_gene(&[1, 200])).unwrap(), "y");
}
