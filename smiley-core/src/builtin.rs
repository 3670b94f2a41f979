//! Built-in smiley tables

use crate::error::ConfigError;
use crate::smiley::{Alias, AliasMap, Smiley, SmileySet};

/// Name of the default built-in set
pub const DEFAULT_SET: &str = "phpbb";

const PHPBB_SMILIES: &[(&str, &str)] = &[
    (":XD:", "http://img442.imageshack.us/img442/8296/44959742.gif"),
    (":angry:", "http://img406.imageshack.us/img406/8637/angryoh.gif"),
    (":biggrin:", "http://img143.imageshack.us/img143/864/biggrino.gif"),
    (":bigsmile:", "http://img203.imageshack.us/img203/5720/bigsmile.gif"),
    (":blink:", "http://img62.imageshack.us/img62/1577/blinkk.gif"),
    (":blush:", "http://img42.imageshack.us/img42/9793/blushc.gif"),
    (":butbut:", "http://img25.imageshack.us/img25/4449/butbut.gif"),
    (":confused:", "http://img11.imageshack.us/img11/9729/confusedu.gif"),
    (":cool:", "http://img689.imageshack.us/img689/4875/coolhf.gif"),
    (":crazy:", "http://img687.imageshack.us/img687/1574/crazyu.gif"),
    (":cry:", "http://img594.imageshack.us/img594/3525/cryo.gif"),
    (":crying:", "http://img521.imageshack.us/img521/2185/crying.gif"),
    (":devil:", "http://img411.imageshack.us/img411/706/deviln.gif"),
    (":eviltongue:", "http://img504.imageshack.us/img504/7766/eviltongue.gif"),
    (":excl:", "http://img291.imageshack.us/img291/5944/excl.gif"),
    (":fear:", "http://img442.imageshack.us/img442/7779/fear.gif"),
    (":flowers:", "http://img406.imageshack.us/img406/3815/flowerse.gif"),
    (":geek:", "http://img143.imageshack.us/img143/3356/geekh.gif"),
    (":glare:", "http://img203.imageshack.us/img203/441/glare.gif"),
    (":happy:", "http://img62.imageshack.us/img62/4039/happyh.gif"),
    (":heart:", "http://img42.imageshack.us/img42/8913/heartnw.gif"),
    (":hehe:", "http://img25.imageshack.us/img25/7854/hehef.gif"),
    (":hmmm:", "http://img11.imageshack.us/img11/7103/hmmmv.gif"),
    (":huh:", "http://img689.imageshack.us/img689/8143/huhkm.gif"),
    (":innocent:", "http://img411.imageshack.us/img411/1730/innocent.gif"),
    (":kiss:", "http://img504.imageshack.us/img504/8940/kissbe.gif"),
    (":laugh:", "http://img291.imageshack.us/img291/9388/laughu.gif"),
    (":mellow:", "http://img203.imageshack.us/img203/5293/mellowz.gif"),
    (":music:", "http://img62.imageshack.us/img62/2146/musics.gif"),
    (":notworthy:", "http://img42.imageshack.us/img42/1948/notworthyl.gif"),
    (":ohmy:", "http://img25.imageshack.us/img25/7503/ohmyr.gif"),
    (":rolleyes:", "http://img11.imageshack.us/img11/4791/rolleyesi.gif"),
    (":sad:", "http://img689.imageshack.us/img689/8214/sadd.gif"),
    (":sad2:", "http://img687.imageshack.us/img687/9141/sad2.gif"),
    (":shifty:", "http://img594.imageshack.us/img594/7150/shifty.gif"),
    (":sleeping:", "http://img521.imageshack.us/img521/1821/sleeping.gif"),
    (":sly:", "http://img402.imageshack.us/img402/9042/slym.gif"),
    (":smile:", "http://img179.imageshack.us/img179/3749/smilej.gif"),
    (":smiling:", "http://img153.imageshack.us/img153/418/smiling.gif"),
    (":thumbs-up:", "http://img100.imageshack.us/img100/8426/thumbsup.gif"),
    (":tongue:", "http://img693.imageshack.us/img693/4546/tongueex.gif"),
    (":unsure:", "http://img203.imageshack.us/img203/7646/unsurev.gif"),
    (":w00t:", "http://img535.imageshack.us/img535/6628/w00t.gif"),
    (":wacko:", "http://img534.imageshack.us/img534/6413/wackok.gif"),
    (":whistling:", "http://img130.imageshack.us/img130/8662/whistlingh.gif"),
    (":wink:", "http://img63.imageshack.us/img63/216/winku.gif"),
    (":wub:", "http://img718.imageshack.us/img718/3589/wubh.gif"),
    (":xmas:", "http://img682.imageshack.us/img682/3183/xmasu.gif"),
    (":yin-yang:", "http://img532.imageshack.us/img532/3685/yinyang.gif"),
];

const PHPBB_ALIASES: &[(&str, &str)] = &[
    (":-)", ":smile:"),
    (":-D", ":biggrin:"),
    (";-)", ":wink:"),
    ("x-D", ":XD:"),
    ("X-D", ":XD:"),
    (":-O", ":ohmy:"),
    (":-(", ":sad:"),
    ("o_O", ":blink:"),
    ("o_o", ":blink:"),
    ("O_o", ":blink:"),
    ("D-:", ":crazy:"),
    (":-/", ":confused:"),
    (";_;", ":crying:"),
    ("<3", ":heart:"),
    ("(!)", ":excl:"),
];

const SKYPE_SMILIES: &[(&str, &str)] = &[
    ("(sadsmile)", "http://img215.imageshack.us/img215/9917/skypeemoticons01sadsmil.gif"),
    ("(bigsmile)", "http://img693.imageshack.us/img693/4186/skypeemoticons02bigsmil.gif"),
    ("(cool)", "http://img685.imageshack.us/img685/9418/skypeemoticons03cool.gif"),
    ("(wink)", "http://img59.imageshack.us/img59/136/skypeemoticons05wink.gif"),
    ("(crying)", "http://img51.imageshack.us/img51/4746/skypeemoticons06crying.gif"),
    ("(sweating)", "http://img25.imageshack.us/img25/7151/skypeemoticons07sweatin.gif"),
    ("(speechless)", "http://img18.imageshack.us/img18/5986/skypeemoticons08speechl.gif"),
    ("(kiss)", "http://img718.imageshack.us/img718/2397/skypeemoticons09kiss.gif"),
    ("(tongueout)", "http://img521.imageshack.us/img521/233/skypeemoticons10tongueo.gif"),
    ("(blush)", "http://img511.imageshack.us/img511/8496/skypeemoticons11blush.gif"),
    ("(wondering)", "http://img249.imageshack.us/img249/4679/skypeemoticons12wonderi.gif"),
    ("(sleepy)", "http://img404.imageshack.us/img404/3351/skypeemoticons13sleepy.gif"),
    ("(dull)", "http://img72.imageshack.us/img72/9681/skypeemoticons14dull.gif"),
    ("(inlove)", "http://img293.imageshack.us/img293/7858/skypeemoticons15inlove.gif"),
    ("(evilgrin)", "http://img25.imageshack.us/img25/9413/skypeemoticons16evilgri.gif"),
    ("(talking)", "http://img88.imageshack.us/img88/766/skypeemoticons17talking.gif"),
    ("(yawn)", "http://img215.imageshack.us/img215/986/skypeemoticons18yawn.gif"),
    ("(puke)", "http://img693.imageshack.us/img693/2752/skypeemoticons19puke.gif"),
    ("(doh)", "http://img685.imageshack.us/img685/105/skypeemoticons20doh.gif"),
    ("(angry)", "http://img59.imageshack.us/img59/7536/skypeemoticons21angry.gif"),
    ("(itwasntme)", "http://img51.imageshack.us/img51/2672/skypeemoticons22itwasnt.gif"),
    ("(party)", "http://img25.imageshack.us/img25/7987/skypeemoticons23party.gif"),
    ("(worried)", "http://img18.imageshack.us/img18/2102/skypeemoticons24worried.gif"),
    ("(mmm)", "http://img718.imageshack.us/img718/5066/skypeemoticons25mmm.gif"),
    ("(nerd)", "http://img521.imageshack.us/img521/581/skypeemoticons26nerd.gif"),
    ("(lipssealed)", "http://img511.imageshack.us/img511/5451/skypeemoticons27lipssea.gif"),
    ("(hi)", "http://img249.imageshack.us/img249/617/skypeemoticons28hi.gif"),
    ("(call)", "http://img404.imageshack.us/img404/8548/skypeemoticons29call.gif"),
    ("(devil)", "http://img72.imageshack.us/img72/8805/skypeemoticons30devil.gif"),
    ("(angel)", "http://img293.imageshack.us/img293/6785/skypeemoticons31angel.gif"),
    ("(envy)", "http://img88.imageshack.us/img88/2596/skypeemoticons32envy.gif"),
    ("(wait)", "http://img215.imageshack.us/img215/2520/skypeemoticons33wait.gif"),
    ("(bear)", "http://img693.imageshack.us/img693/2928/skypeemoticons34bear.gif"),
    ("(makeup)", "http://img685.imageshack.us/img685/3116/skypeemoticons35makeup.gif"),
    ("(giggle)", "http://img59.imageshack.us/img59/5732/skypeemoticons36giggle.gif"),
    ("(clapping)", "http://img51.imageshack.us/img51/2725/skypeemoticons37clappin.gif"),
    ("(thinking)", "http://img25.imageshack.us/img25/3874/skypeemoticons38thinkin.gif"),
    ("(bow)", "http://img18.imageshack.us/img18/4066/skypeemoticons39bow.gif"),
    ("(rofl)", "http://img718.imageshack.us/img718/151/skypeemoticons40rofl.gif"),
    ("(whew)", "http://img88.imageshack.us/img88/8092/skypeemoticons41whew.gif"),
    ("(happy)", "http://img18.imageshack.us/img18/4458/skypeemoticons42happy.gif"),
    ("(smirk)", "http://img215.imageshack.us/img215/5690/skypeemoticons43smirk.gif"),
    ("(nod)", "http://img693.imageshack.us/img693/8568/skypeemoticons44nod.gif"),
    ("(shake)", "http://img685.imageshack.us/img685/8883/skypeemoticons45shake.gif"),
    ("(punch)", "http://img59.imageshack.us/img59/9932/skypeemoticons46punch.gif"),
    ("(emo)", "http://img51.imageshack.us/img51/7244/skypeemoticons47emo.gif"),
    ("(yes)", "http://img25.imageshack.us/img25/900/skypeemoticons48yes.gif"),
    ("(no)", "http://img18.imageshack.us/img18/605/skypeemoticons49no.gif"),
    ("(handshake)", "http://img718.imageshack.us/img718/8674/skypeemoticons50handsha.gif"),
    ("(skype)", "http://img521.imageshack.us/img521/7228/skypeemoticons51skype.gif"),
    ("(heart)", "http://img511.imageshack.us/img511/863/skypeemoticons52heart.gif"),
    ("(brokenheart)", "http://img249.imageshack.us/img249/5262/skypeemoticons53brokenh.gif"),
    ("(mail)", "http://img404.imageshack.us/img404/1822/skypeemoticons54mail.gif"),
    ("(flower)", "http://img72.imageshack.us/img72/9161/skypeemoticons55flower.gif"),
    ("(rain)", "http://img293.imageshack.us/img293/1928/skypeemoticons56rain.gif"),
    ("(sun)", "http://img88.imageshack.us/img88/3553/skypeemoticons57sun.gif"),
    ("(time)", "http://img215.imageshack.us/img215/8866/skypeemoticons58time.gif"),
    ("(music)", "http://img693.imageshack.us/img693/263/skypeemoticons59music.gif"),
    ("(movie)", "http://img685.imageshack.us/img685/8636/skypeemoticons60movie.gif"),
    ("(phone)", "http://img59.imageshack.us/img59/5674/skypeemoticons61phone.gif"),
    ("(coffee)", "http://img51.imageshack.us/img51/8614/skypeemoticons62coffee.gif"),
    ("(pizza)", "http://img25.imageshack.us/img25/4703/skypeemoticons63pizza.gif"),
    ("(cash)", "http://img18.imageshack.us/img18/3629/skypeemoticons64cash.gif"),
    ("(muscle)", "http://img718.imageshack.us/img718/263/skypeemoticons65muscle.gif"),
    ("(cake)", "http://img521.imageshack.us/img521/5217/skypeemoticons66cake.gif"),
    ("(beer)", "http://img511.imageshack.us/img511/966/skypeemoticons67beer.gif"),
    ("(drink)", "http://img249.imageshack.us/img249/7611/skypeemoticons68drink.gif"),
    ("(dance)", "http://img404.imageshack.us/img404/9527/skypeemoticons69dance.gif"),
    ("(ninja)", "http://img293.imageshack.us/img293/3987/skypeemoticons70ninja.gif"),
    ("(star)", "http://img88.imageshack.us/img88/2716/skypeemoticons71star.gif"),
    ("(mooning)", "http://img404.imageshack.us/img404/2161/skypeemoticons72mooning.gif"),
    ("(middlefinger)", "http://img72.imageshack.us/img72/3724/skypeemoticons73middlef.gif"),
    ("(bandit)", "http://img293.imageshack.us/img293/9889/skypeemoticons74bandit.gif"),
    ("(drunk)", "http://img88.imageshack.us/img88/3300/skypeemoticons75drunk.gif"),
    ("(smoke)", "http://img215.imageshack.us/img215/9668/skypeemoticons76smoke.gif"),
    ("(toivo)", "http://img693.imageshack.us/img693/5944/skypeemoticons77toivo.gif"),
    ("(rock)", "http://img685.imageshack.us/img685/1015/skypeemoticons78rock.gif"),
    ("(headbang)", "http://img59.imageshack.us/img59/6249/skypeemoticons79headban.gif"),
    ("(bug)", "http://img51.imageshack.us/img51/5301/skypeemoticons80bug.gif"),
    ("(fubar)", "http://img25.imageshack.us/img25/6026/skypeemoticons81fubar.gif"),
    ("(poolparty)", "http://img18.imageshack.us/img18/6520/skypeemoticons82poolpar.gif"),
    ("(swear)", "http://img718.imageshack.us/img718/2307/skypeemoticons83swear.gif"),
    ("(tmi)", "http://img521.imageshack.us/img521/6575/skypeemoticons84tmi.gif"),
    ("(heidy)", "http://img511.imageshack.us/img511/5670/skypeemoticons85heidy.gif"),
    ("(smile)", "http://img249.imageshack.us/img249/6522/skypeemoticonssmile.gif"),
];

struct BuiltinSet {
    name: &'static str,
    smilies: &'static [(&'static str, &'static str)],
    aliases: &'static [(&'static str, &'static str)],
}

const BUILTIN_SETS: [BuiltinSet; 2] = [
    BuiltinSet {
        name: "phpbb",
        smilies: PHPBB_SMILIES,
        aliases: PHPBB_ALIASES,
    },
    BuiltinSet {
        name: "skype",
        smilies: SKYPE_SMILIES,
        aliases: &[],
    },
];

/// Names of the built-in sets
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTIN_SETS.iter().map(|set| set.name)
}

/// Whether `name` is a built-in set
pub fn exists(name: &str) -> bool {
    BUILTIN_SETS.iter().any(|set| set.name == name)
}

/// Load a built-in set and its aliases by name
pub fn load(name: &str) -> Result<(SmileySet, AliasMap), ConfigError> {
    let builtin = BUILTIN_SETS
        .iter()
        .find(|set| set.name == name)
        .ok_or_else(|| ConfigError::UnknownSet(name.to_string()))?;

    let set = SmileySet::new(
        builtin
            .smilies
            .iter()
            .map(|(token, url)| Smiley::new(*token, *url))
            .collect(),
    )?;
    let aliases = AliasMap::new(
        builtin
            .aliases
            .iter()
            .map(|(alias, token)| Alias::new(*alias, *token))
            .collect(),
    )?;
    aliases.validate(&set)?;

    Ok((set, aliases))
}
