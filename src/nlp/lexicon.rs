//! Embedded lexical tables for the built-in tagger and splitter
//!
//! Everything ships inside the binary: no model files, no downloads. Keys are
//! lowercase; the tagger lowercases before lookup.

use crate::types::PosTag;

/// Closed-class words, irregular forms, and suffix-rule exceptions.
///
/// The suffix rules in the tagger run only after a lexicon miss, so a word
/// listed here always gets this tag (case-insensitively).
pub(crate) const WORD_TAGS: &[(&str, PosTag)] = &[
    // Determiners
    ("the", PosTag::Dt),
    ("a", PosTag::Dt),
    ("an", PosTag::Dt),
    ("this", PosTag::Dt),
    ("that", PosTag::Dt),
    ("these", PosTag::Dt),
    ("those", PosTag::Dt),
    ("each", PosTag::Dt),
    ("every", PosTag::Dt),
    ("either", PosTag::Dt),
    ("neither", PosTag::Dt),
    ("some", PosTag::Dt),
    ("any", PosTag::Dt),
    ("no", PosTag::Dt),
    ("another", PosTag::Dt),
    ("all", PosTag::Dt),
    ("both", PosTag::Dt),
    // Personal pronouns
    ("i", PosTag::Prp),
    ("you", PosTag::Prp),
    ("he", PosTag::Prp),
    ("she", PosTag::Prp),
    ("it", PosTag::Prp),
    ("we", PosTag::Prp),
    ("they", PosTag::Prp),
    ("me", PosTag::Prp),
    ("him", PosTag::Prp),
    ("us", PosTag::Prp),
    ("them", PosTag::Prp),
    ("myself", PosTag::Prp),
    ("yourself", PosTag::Prp),
    ("himself", PosTag::Prp),
    ("herself", PosTag::Prp),
    ("itself", PosTag::Prp),
    ("ourselves", PosTag::Prp),
    ("yourselves", PosTag::Prp),
    ("themselves", PosTag::Prp),
    ("oneself", PosTag::Prp),
    ("mine", PosTag::Prp),
    ("yours", PosTag::Prp),
    ("hers", PosTag::Prp),
    ("ours", PosTag::Prp),
    ("theirs", PosTag::Prp),
    // Possessive pronouns
    ("my", PosTag::PrpPoss),
    ("your", PosTag::PrpPoss),
    ("his", PosTag::PrpPoss),
    ("her", PosTag::PrpPoss),
    ("its", PosTag::PrpPoss),
    ("our", PosTag::PrpPoss),
    ("their", PosTag::PrpPoss),
    // Prepositions and subordinating conjunctions
    ("in", PosTag::In),
    ("on", PosTag::In),
    ("at", PosTag::In),
    ("by", PosTag::In),
    ("for", PosTag::In),
    ("with", PosTag::In),
    ("about", PosTag::In),
    ("against", PosTag::In),
    ("between", PosTag::In),
    ("among", PosTag::In),
    ("amongst", PosTag::In),
    ("into", PosTag::In),
    ("through", PosTag::In),
    ("throughout", PosTag::In),
    ("during", PosTag::In),
    ("before", PosTag::In),
    ("after", PosTag::In),
    ("above", PosTag::In),
    ("below", PosTag::In),
    ("from", PosTag::In),
    ("of", PosTag::In),
    ("off", PosTag::In),
    ("over", PosTag::In),
    ("under", PosTag::In),
    ("underneath", PosTag::In),
    ("beneath", PosTag::In),
    ("since", PosTag::In),
    ("until", PosTag::In),
    ("till", PosTag::In),
    ("toward", PosTag::In),
    ("towards", PosTag::In),
    ("upon", PosTag::In),
    ("within", PosTag::In),
    ("without", PosTag::In),
    ("near", PosTag::In),
    ("across", PosTag::In),
    ("behind", PosTag::In),
    ("beyond", PosTag::In),
    ("despite", PosTag::In),
    ("except", PosTag::In),
    ("because", PosTag::In),
    ("although", PosTag::In),
    ("though", PosTag::In),
    ("while", PosTag::In),
    ("if", PosTag::In),
    ("unless", PosTag::In),
    ("whether", PosTag::In),
    ("than", PosTag::In),
    ("as", PosTag::In),
    ("like", PosTag::In),
    ("per", PosTag::In),
    ("via", PosTag::In),
    ("amid", PosTag::In),
    ("along", PosTag::In),
    ("around", PosTag::In),
    ("beside", PosTag::In),
    ("besides", PosTag::In),
    ("outside", PosTag::In),
    ("inside", PosTag::In),
    ("onto", PosTag::In),
    ("unto", PosTag::In),
    ("versus", PosTag::In),
    // Coordinating conjunctions
    ("and", PosTag::Cc),
    ("but", PosTag::Cc),
    ("or", PosTag::Cc),
    ("nor", PosTag::Cc),
    // Modals
    ("can", PosTag::Md),
    ("could", PosTag::Md),
    ("may", PosTag::Md),
    ("might", PosTag::Md),
    ("must", PosTag::Md),
    ("shall", PosTag::Md),
    ("should", PosTag::Md),
    ("will", PosTag::Md),
    ("would", PosTag::Md),
    ("ought", PosTag::Md),
    ("cannot", PosTag::Md),
    // Auxiliaries and copulas
    ("am", PosTag::Vbp),
    ("is", PosTag::Vbz),
    ("are", PosTag::Vbp),
    ("was", PosTag::Vbd),
    ("were", PosTag::Vbd),
    ("be", PosTag::Vb),
    ("been", PosTag::Vbn),
    ("being", PosTag::Vbg),
    ("has", PosTag::Vbz),
    ("have", PosTag::Vbp),
    ("had", PosTag::Vbd),
    ("having", PosTag::Vbg),
    ("do", PosTag::Vbp),
    ("does", PosTag::Vbz),
    ("did", PosTag::Vbd),
    ("done", PosTag::Vbn),
    ("doing", PosTag::Vbg),
    // Contractions carry their subject's or auxiliary's tag.
    ("don't", PosTag::Vbp),
    ("doesn't", PosTag::Vbz),
    ("didn't", PosTag::Vbd),
    ("can't", PosTag::Md),
    ("won't", PosTag::Md),
    ("wouldn't", PosTag::Md),
    ("couldn't", PosTag::Md),
    ("shouldn't", PosTag::Md),
    ("mustn't", PosTag::Md),
    ("isn't", PosTag::Vbz),
    ("aren't", PosTag::Vbp),
    ("wasn't", PosTag::Vbd),
    ("weren't", PosTag::Vbd),
    ("hasn't", PosTag::Vbz),
    ("haven't", PosTag::Vbp),
    ("hadn't", PosTag::Vbd),
    ("it's", PosTag::Prp),
    ("he's", PosTag::Prp),
    ("she's", PosTag::Prp),
    ("that's", PosTag::Dt),
    ("there's", PosTag::Ex),
    ("what's", PosTag::Wp),
    ("who's", PosTag::Wp),
    ("let's", PosTag::Vb),
    ("i'm", PosTag::Prp),
    ("you're", PosTag::Prp),
    ("we're", PosTag::Prp),
    ("they're", PosTag::Prp),
    ("i've", PosTag::Prp),
    ("you've", PosTag::Prp),
    ("we've", PosTag::Prp),
    ("they've", PosTag::Prp),
    ("i'll", PosTag::Prp),
    ("you'll", PosTag::Prp),
    ("he'll", PosTag::Prp),
    ("she'll", PosTag::Prp),
    ("we'll", PosTag::Prp),
    ("they'll", PosTag::Prp),
    ("i'd", PosTag::Prp),
    ("you'd", PosTag::Prp),
    ("he'd", PosTag::Prp),
    ("she'd", PosTag::Prp),
    ("we'd", PosTag::Prp),
    ("they'd", PosTag::Prp),
    // Infinitive marker, existential there
    ("to", PosTag::To),
    ("there", PosTag::Ex),
    // Wh-words
    ("which", PosTag::Wdt),
    ("who", PosTag::Wp),
    ("whom", PosTag::Wp),
    ("what", PosTag::Wp),
    ("whose", PosTag::WpPoss),
    ("where", PosTag::Wrb),
    ("when", PosTag::Wrb),
    ("why", PosTag::Wrb),
    ("how", PosTag::Wrb),
    // Adverbs
    ("not", PosTag::Rb),
    ("very", PosTag::Rb),
    ("also", PosTag::Rb),
    ("often", PosTag::Rb),
    ("never", PosTag::Rb),
    ("always", PosTag::Rb),
    ("now", PosTag::Rb),
    ("then", PosTag::Rb),
    ("here", PosTag::Rb),
    ("too", PosTag::Rb),
    ("just", PosTag::Rb),
    ("only", PosTag::Rb),
    ("again", PosTag::Rb),
    ("soon", PosTag::Rb),
    ("still", PosTag::Rb),
    ("even", PosTag::Rb),
    ("already", PosTag::Rb),
    ("quite", PosTag::Rb),
    ("rather", PosTag::Rb),
    ("almost", PosTag::Rb),
    ("perhaps", PosTag::Rb),
    ("maybe", PosTag::Rb),
    ("however", PosTag::Rb),
    ("thus", PosTag::Rb),
    ("therefore", PosTag::Rb),
    ("instead", PosTag::Rb),
    ("otherwise", PosTag::Rb),
    ("nevertheless", PosTag::Rb),
    ("meanwhile", PosTag::Rb),
    ("moreover", PosTag::Rb),
    ("furthermore", PosTag::Rb),
    ("indeed", PosTag::Rb),
    ("once", PosTag::Rb),
    ("twice", PosTag::Rb),
    ("ago", PosTag::Rb),
    ("away", PosTag::Rb),
    ("together", PosTag::Rb),
    ("apart", PosTag::Rb),
    ("abroad", PosTag::Rb),
    ("ahead", PosTag::Rb),
    ("else", PosTag::Rb),
    ("ever", PosTag::Rb),
    ("anywhere", PosTag::Rb),
    ("everywhere", PosTag::Rb),
    ("nowhere", PosTag::Rb),
    ("somewhere", PosTag::Rb),
    ("well", PosTag::Rb),
    ("up", PosTag::Rb),
    ("down", PosTag::Rb),
    ("out", PosTag::Rb),
    ("so", PosTag::Rb),
    ("yet", PosTag::Rb),
    ("far", PosTag::Rb),
    ("fast", PosTag::Rb),
    // Interjections
    ("oh", PosTag::Uh),
    ("yes", PosTag::Uh),
    ("hey", PosTag::Uh),
    ("hello", PosTag::Uh),
    ("wow", PosTag::Uh),
    ("ah", PosTag::Uh),
    // Spelled-out numbers
    ("zero", PosTag::Cd),
    ("one", PosTag::Cd),
    ("two", PosTag::Cd),
    ("three", PosTag::Cd),
    ("four", PosTag::Cd),
    ("five", PosTag::Cd),
    ("six", PosTag::Cd),
    ("seven", PosTag::Cd),
    ("eight", PosTag::Cd),
    ("nine", PosTag::Cd),
    ("ten", PosTag::Cd),
    ("eleven", PosTag::Cd),
    ("twelve", PosTag::Cd),
    ("thirteen", PosTag::Cd),
    ("fourteen", PosTag::Cd),
    ("fifteen", PosTag::Cd),
    ("sixteen", PosTag::Cd),
    ("seventeen", PosTag::Cd),
    ("eighteen", PosTag::Cd),
    ("nineteen", PosTag::Cd),
    ("twenty", PosTag::Cd),
    ("thirty", PosTag::Cd),
    ("forty", PosTag::Cd),
    ("fifty", PosTag::Cd),
    ("sixty", PosTag::Cd),
    ("seventy", PosTag::Cd),
    ("eighty", PosTag::Cd),
    ("ninety", PosTag::Cd),
    ("hundred", PosTag::Cd),
    ("thousand", PosTag::Cd),
    ("million", PosTag::Cd),
    ("billion", PosTag::Cd),
    ("trillion", PosTag::Cd),
    // Comparatives and superlatives without the regular suffix shape
    ("more", PosTag::Jjr),
    ("less", PosTag::Jjr),
    ("better", PosTag::Jjr),
    ("worse", PosTag::Jjr),
    ("bigger", PosTag::Jjr),
    ("larger", PosTag::Jjr),
    ("smaller", PosTag::Jjr),
    ("greater", PosTag::Jjr),
    ("higher", PosTag::Jjr),
    ("lower", PosTag::Jjr),
    ("longer", PosTag::Jjr),
    ("older", PosTag::Jjr),
    ("younger", PosTag::Jjr),
    ("earlier", PosTag::Jjr),
    ("fewer", PosTag::Jjr),
    ("further", PosTag::Rbr),
    ("farther", PosTag::Rbr),
    ("best", PosTag::Jjs),
    ("worst", PosTag::Jjs),
    ("most", PosTag::Rbs),
    ("least", PosTag::Rbs),
    // Irregular plurals
    ("men", PosTag::Nns),
    ("women", PosTag::Nns),
    ("children", PosTag::Nns),
    ("people", PosTag::Nns),
    ("feet", PosTag::Nns),
    ("teeth", PosTag::Nns),
    ("mice", PosTag::Nns),
    ("geese", PosTag::Nns),
    ("data", PosTag::Nns),
    ("criteria", PosTag::Nns),
    ("phenomena", PosTag::Nns),
    // Irregular past forms
    ("said", PosTag::Vbd),
    ("made", PosTag::Vbd),
    ("went", PosTag::Vbd),
    ("became", PosTag::Vbd),
    ("began", PosTag::Vbd),
    ("grew", PosTag::Vbd),
    ("took", PosTag::Vbd),
    ("came", PosTag::Vbd),
    ("gave", PosTag::Vbd),
    ("got", PosTag::Vbd),
    ("found", PosTag::Vbd),
    ("held", PosTag::Vbd),
    ("won", PosTag::Vbd),
    ("wrote", PosTag::Vbd),
    ("led", PosTag::Vbd),
    ("met", PosTag::Vbd),
    ("ran", PosTag::Vbd),
    ("rose", PosTag::Vbd),
    ("fell", PosTag::Vbd),
    ("brought", PosTag::Vbd),
    ("bought", PosTag::Vbd),
    ("thought", PosTag::Vbd),
    ("taught", PosTag::Vbd),
    ("caught", PosTag::Vbd),
    ("sold", PosTag::Vbd),
    ("told", PosTag::Vbd),
    ("felt", PosTag::Vbd),
    ("kept", PosTag::Vbd),
    ("left", PosTag::Vbd),
    ("lost", PosTag::Vbd),
    ("meant", PosTag::Vbd),
    ("paid", PosTag::Vbd),
    ("sent", PosTag::Vbd),
    ("spent", PosTag::Vbd),
    ("stood", PosTag::Vbd),
    ("built", PosTag::Vbd),
    ("sat", PosTag::Vbd),
    ("spoke", PosTag::Vbd),
    ("broke", PosTag::Vbd),
    ("chose", PosTag::Vbd),
    ("drove", PosTag::Vbd),
    ("ate", PosTag::Vbd),
    ("drew", PosTag::Vbd),
    ("flew", PosTag::Vbd),
    ("knew", PosTag::Vbd),
    ("threw", PosTag::Vbd),
    ("wore", PosTag::Vbd),
    ("heard", PosTag::Vbd),
    ("saw", PosTag::Vbd),
    // Irregular participles
    ("known", PosTag::Vbn),
    ("seen", PosTag::Vbn),
    ("given", PosTag::Vbn),
    ("taken", PosTag::Vbn),
    ("shown", PosTag::Vbn),
    ("written", PosTag::Vbn),
    ("born", PosTag::Vbn),
    ("chosen", PosTag::Vbn),
    ("broken", PosTag::Vbn),
    ("spoken", PosTag::Vbn),
    ("driven", PosTag::Vbn),
    ("eaten", PosTag::Vbn),
    ("drawn", PosTag::Vbn),
    ("flown", PosTag::Vbn),
    ("grown", PosTag::Vbn),
    ("thrown", PosTag::Vbn),
    ("worn", PosTag::Vbn),
    ("begun", PosTag::Vbn),
    ("sung", PosTag::Vbn),
    // Common base-form verbs the suffix rules cannot catch
    ("go", PosTag::Vb),
    ("see", PosTag::Vb),
    ("make", PosTag::Vb),
    ("take", PosTag::Vb),
    ("get", PosTag::Vb),
    ("give", PosTag::Vb),
    ("come", PosTag::Vb),
    ("know", PosTag::Vb),
    ("think", PosTag::Vb),
    ("say", PosTag::Vb),
    ("tell", PosTag::Vb),
    ("find", PosTag::Vb),
    ("want", PosTag::Vb),
    ("need", PosTag::Vbp),
    ("try", PosTag::Vb),
    ("ask", PosTag::Vb),
    ("seem", PosTag::Vb),
    ("feel", PosTag::Vb),
    ("leave", PosTag::Vb),
    ("put", PosTag::Vb),
    ("let", PosTag::Vb),
    ("keep", PosTag::Vb),
    ("begin", PosTag::Vb),
    ("show", PosTag::Vb),
    ("hear", PosTag::Vb),
    ("run", PosTag::Vb),
    ("believe", PosTag::Vb),
    ("bring", PosTag::Vb),
    ("sing", PosTag::Vb),
    ("happen", PosTag::Vb),
    ("write", PosTag::Vb),
    ("sit", PosTag::Vb),
    ("stand", PosTag::Vb),
    ("lose", PosTag::Vb),
    ("pay", PosTag::Vb),
    ("meet", PosTag::Vb),
    ("include", PosTag::Vb),
    ("continue", PosTag::Vb),
    ("become", PosTag::Vb),
    ("understand", PosTag::Vb),
    ("speak", PosTag::Vb),
    ("read", PosTag::Vb),
    ("spend", PosTag::Vb),
    ("grow", PosTag::Vb),
    ("win", PosTag::Vb),
    ("remember", PosTag::Vb),
    ("consider", PosTag::Vb),
    ("appear", PosTag::Vb),
    ("buy", PosTag::Vb),
    ("wait", PosTag::Vb),
    ("die", PosTag::Vb),
    ("send", PosTag::Vb),
    ("expect", PosTag::Vb),
    ("build", PosTag::Vb),
    ("stay", PosTag::Vb),
    ("fall", PosTag::Vb),
    ("kill", PosTag::Vb),
    ("remain", PosTag::Vb),
    ("feed", PosTag::Vb),
    ("chase", PosTag::Vb),
    // Common adjectives with no distinguishing suffix
    ("good", PosTag::Jj),
    ("new", PosTag::Jj),
    ("old", PosTag::Jj),
    ("great", PosTag::Jj),
    ("high", PosTag::Jj),
    ("low", PosTag::Jj),
    ("small", PosTag::Jj),
    ("large", PosTag::Jj),
    ("big", PosTag::Jj),
    ("long", PosTag::Jj),
    ("short", PosTag::Jj),
    ("little", PosTag::Jj),
    ("young", PosTag::Jj),
    ("strong", PosTag::Jj),
    ("weak", PosTag::Jj),
    ("common", PosTag::Jj),
    ("poor", PosTag::Jj),
    ("rich", PosTag::Jj),
    ("major", PosTag::Jj),
    ("minor", PosTag::Jj),
    ("main", PosTag::Jj),
    ("same", PosTag::Jj),
    ("whole", PosTag::Jj),
    ("full", PosTag::Jj),
    ("free", PosTag::Jj),
    ("true", PosTag::Jj),
    ("false", PosTag::Jj),
    ("real", PosTag::Jj),
    ("hard", PosTag::Jj),
    ("easy", PosTag::Jj),
    ("late", PosTag::Jj),
    ("early", PosTag::Jj),
    ("likely", PosTag::Jj),
    ("daily", PosTag::Jj),
    ("simple", PosTag::Jj),
    ("modern", PosTag::Jj),
    ("ancient", PosTag::Jj),
    ("human", PosTag::Jj),
    ("own", PosTag::Jj),
    ("other", PosTag::Jj),
    ("many", PosTag::Jj),
    ("much", PosTag::Jj),
    ("few", PosTag::Jj),
    ("several", PosTag::Jj),
    ("important", PosTag::Jj),
    ("different", PosTag::Jj),
    ("public", PosTag::Jj),
    ("private", PosTag::Jj),
    ("popular", PosTag::Jj),
    ("similar", PosTag::Jj),
    ("necessary", PosTag::Jj),
    ("certain", PosTag::Jj),
    ("clear", PosTag::Jj),
    ("recent", PosTag::Jj),
    ("current", PosTag::Jj),
    ("final", PosTag::Jj),
    ("total", PosTag::Jj),
    ("general", PosTag::Jj),
    ("national", PosTag::Jj),
    ("international", PosTag::Jj),
    ("local", PosTag::Jj),
    ("social", PosTag::Jj),
    ("political", PosTag::Jj),
    ("economic", PosTag::Jj),
    ("official", PosTag::Jj),
    ("special", PosTag::Jj),
    ("particular", PosTag::Jj),
    ("due", PosTag::Jj),
    ("next", PosTag::Jj),
    ("last", PosTag::Jj),
    ("first", PosTag::Jj),
    ("second", PosTag::Jj),
    ("third", PosTag::Jj),
    ("top", PosTag::Jj),
    ("deep", PosTag::Jj),
    ("wide", PosTag::Jj),
    ("broad", PosTag::Jj),
    ("narrow", PosTag::Jj),
    ("thick", PosTag::Jj),
    ("thin", PosTag::Jj),
    ("heavy", PosTag::Jj),
    ("light", PosTag::Jj),
    ("dark", PosTag::Jj),
    ("bright", PosTag::Jj),
    ("hot", PosTag::Jj),
    ("cold", PosTag::Jj),
    ("warm", PosTag::Jj),
    ("cool", PosTag::Jj),
    ("dry", PosTag::Jj),
    ("wet", PosTag::Jj),
    ("clean", PosTag::Jj),
    ("safe", PosTag::Jj),
    ("happy", PosTag::Jj),
    ("sad", PosTag::Jj),
    ("proud", PosTag::Jj),
    ("white", PosTag::Jj),
    ("black", PosTag::Jj),
    ("red", PosTag::Jj),
    ("blue", PosTag::Jj),
    ("green", PosTag::Jj),
    ("yellow", PosTag::Jj),
    ("brown", PosTag::Jj),
    ("gray", PosTag::Jj),
    ("such", PosTag::Jj),
    ("able", PosTag::Jj),
    ("entire", PosTag::Jj),
    ("huge", PosTag::Jj),
    ("tiny", PosTag::Jj),
    ("vast", PosTag::Jj),
    ("honest", PosTag::Jj),
    ("modest", PosTag::Jj),
    ("earnest", PosTag::Jj),
    ("ugly", PosTag::Jj),
    ("holy", PosTag::Jj),
    ("silly", PosTag::Jj),
    ("friendly", PosTag::Jj),
    ("lonely", PosTag::Jj),
    ("lovely", PosTag::Jj),
    ("deadly", PosTag::Jj),
    ("elderly", PosTag::Jj),
    ("wicked", PosTag::Jj),
    ("naked", PosTag::Jj),
    ("sacred", PosTag::Jj),
    // Nouns the suffix rules would otherwise mis-tag
    ("forest", PosTag::Nn),
    ("interest", PosTag::Nn),
    ("harvest", PosTag::Nn),
    ("chest", PosTag::Nn),
    ("guest", PosTag::Nn),
    ("crest", PosTag::Nn),
    ("priest", PosTag::Nn),
    ("arrest", PosTag::Nn),
    ("contest", PosTag::Nn),
    ("protest", PosTag::Nn),
    ("request", PosTag::Nn),
    ("quest", PosTag::Nn),
    ("family", PosTag::Nn),
    ("supply", PosTag::Nn),
    ("assembly", PosTag::Nn),
    ("ally", PosTag::Nn),
    ("reply", PosTag::Nn),
    ("butterfly", PosTag::Nn),
    ("monopoly", PosTag::Nn),
    ("thing", PosTag::Nn),
    ("king", PosTag::Nn),
    ("ring", PosTag::Nn),
    ("wing", PosTag::Nn),
    ("spring", PosTag::Nn),
    ("string", PosTag::Nn),
    ("morning", PosTag::Nn),
    ("evening", PosTag::Nn),
    ("nothing", PosTag::Nn),
    ("something", PosTag::Nn),
    ("anything", PosTag::Nn),
    ("everything", PosTag::Nn),
    ("building", PosTag::Nn),
    ("meaning", PosTag::Nn),
    ("feeling", PosTag::Nn),
    ("meeting", PosTag::Nn),
    ("painting", PosTag::Nn),
    ("seed", PosTag::Nn),
    ("speed", PosTag::Nn),
    ("deed", PosTag::Nn),
    ("breed", PosTag::Nn),
    ("greed", PosTag::Nn),
    ("creed", PosTag::Nn),
    ("news", PosTag::Nn),
    ("physics", PosTag::Nn),
    ("politics", PosTag::Nn),
    ("economics", PosTag::Nn),
    ("mathematics", PosTag::Nn),
];

/// Abbreviations after which a period does not end a sentence.
///
/// Stored without the trailing period, lowercase. Single-letter initials
/// (middle names, `U.S.` chains) are handled by a rule in the splitter, not
/// listed here.
pub(crate) const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "inc", "ltd", "co",
    "corp", "dept", "est", "fig", "gen", "gov", "hon", "rev", "vol", "pp", "p", "approx", "apt",
    "ave", "blvd", "capt", "col", "sgt", "lt", "cmdr", "maj", "adm", "sen", "rep", "pres", "supt",
    "dist", "univ", "assn", "bros", "messrs", "mme", "mlle", "fr", "br", "ca", "cf", "al", "ed",
    "eds", "min", "max", "no", "nos",
];
